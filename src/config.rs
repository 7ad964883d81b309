// ABOUTME: Constants for the interpreter: version, banner, prompt, file extension

pub const VERSION: &str = "0.1.0";
pub const WELCOME_MESSAGE: &str = "Coiz v0.1";
pub const WELCOME_SUBTITLE: &str = "A tree-walking interpreter for the Coiz scripting language";

/// Interactive prompt shown by the read-evaluate loop.
pub const PROMPT: &str = "> ";

/// History file for the interactive prompt, kept in the working directory.
pub const HISTORY_FILE: &str = ".coiz_history";

/// Extension appended to `import("name")` arguments.
pub const SOURCE_EXTENSION: &str = ".coiz";

/// Usage line printed when the binary is given too many arguments.
pub const USAGE: &str = "Usage: coiz [script]";
