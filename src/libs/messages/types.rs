#[derive(Debug, Clone)]
pub enum Message {
    // === CREDENTIAL MESSAGES ===
    PromptApiKey,

    // === REGISTRATION MESSAGES ===
    TaskRegistered(String),
    RegistrationStatus(u16, String),
    TaskUrlMissing,
    PromptTaskUrl,
    PromptStart,
    PromptEnd,
    InvalidDateFormat(String),
    BatchFinished(usize),

    // === CSV MESSAGES ===
    CsvMissingColumns,
    CsvLoadFailed(String),
    TemplateWritten(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    PromptSelectModules,
    PromptApiUrl,
}
