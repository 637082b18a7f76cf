//! Built-in Italian to English entries.
//!
//! Order matters: at any input position the first matching entry wins, so
//! longer phrases are listed before the shorter fragments they contain.

/// Italian source fragment and its English replacement, in lookup order.
pub(crate) const ITALIAN_TO_ENGLISH: &[(&str, &str)] = &[
    // Canned backend sentences; these normally hit the exact-match path.
    (
        "🔴 Rischio ALTO: questa email presenta numerosi indicatori di phishing. Non cliccare sui link e non fornire credenziali.",
        "🔴 HIGH risk: this email shows several phishing indicators. Do not click any links or share credentials.",
    ),
    (
        "🟡 Rischio MEDIO: sono stati rilevati alcuni elementi sospetti. Verifica il mittente prima di agire.",
        "🟡 MEDIUM risk: some suspicious elements were found. Verify the sender before acting.",
    ),
    (
        "🟢 Rischio BASSO: non sono stati rilevati indicatori evidenti di phishing.",
        "🟢 LOW risk: no clear phishing indicators were detected.",
    ),
    (
        "⚠️ Attenzione: questo URL presenta caratteristiche sospette.",
        "⚠️ Warning: this URL shows suspicious characteristics.",
    ),
    (
        "✅ Nessun indicatore di rischio rilevato.",
        "✅ No risk indicators detected.",
    ),
    (
        "Errore durante l'analisi. Riprova più tardi.",
        "Analysis error. Please try again later.",
    ),
    (
        "Errore di connessione. Controlla la connessione internet e riprova.",
        "Connection error. Check your internet connection and try again.",
    ),
    // Finding titles and detail fragments.
    ("Problemi Rilevati", "Issues Detected"),
    ("Nessun problema rilevato", "No issues detected"),
    ("Analisi completata", "Analysis complete"),
    ("Mittente sospetto", "Suspicious sender"),
    ("Dominio sospetto", "Suspicious domain"),
    ("Dominio registrato di recente", "Recently registered domain"),
    ("Link sospetto", "Suspicious link"),
    ("URL sospetto", "Suspicious URL"),
    ("Allegato sospetto", "Suspicious attachment"),
    ("Allegato pericoloso", "Dangerous attachment"),
    ("Linguaggio urgente", "Urgent language"),
    ("Richiesta di credenziali", "Credential request"),
    ("Richiesta di dati personali", "Personal data request"),
    ("Abbreviatore di URL", "Shortened link"),
    ("Doppia estensione", "Double extension"),
    ("HTML camuffato", "Disguised HTML file"),
    ("Tipo MIME non corrispondente", "MIME type mismatch"),
    ("Tipo di file ad alto rischio", "High-risk file type"),
    ("Fattori di rischio", "Risk factors"),
    // Educational tips.
    ("Non cliccare sui link", "Do not click the links"),
    ("Verifica sempre il mittente", "Always verify the sender"),
    ("Non inserire mai le tue credenziali", "Never enter your credentials"),
    ("Contatta direttamente l'azienda", "Contact the company directly"),
    ("Non aprire allegati inattesi", "Do not open unexpected attachments"),
    ("Consigli", "Tips"),
    // Tier words embedded in free text.
    ("Rischio alto", "High risk"),
    ("Rischio medio", "Medium risk"),
    ("Rischio basso", "Low risk"),
    ("rischio alto", "high risk"),
    ("rischio medio", "medium risk"),
    ("rischio basso", "low risk"),
    ("sospetto", "suspicious"),
    ("sospetta", "suspicious"),
    ("sospetti", "suspicious"),
    ("sospette", "suspicious"),
    ("urgente", "urgent"),
];
