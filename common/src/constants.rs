// Environment variable names, read once at process start by the entrypoint.
// Library crates receive the resolved values as parameters.
pub const DISCORD_BOT_TOKEN: &str = "DISCORD_BOT_TOKEN";
pub const ITAD_API_KEY: &str = "ITAD_API_KEY";
pub const GAMEPASS_CSV_URL: &str = "GAMEPASS_CSV_URL";
pub const PRICE_COUNTRY: &str = "PRICE_COUNTRY";
pub const KEEP_ALIVE_PORT: &str = "PORT";

/// Public CSV export of the Game Pass title sheet.
pub const DEFAULT_CATALOG_URL: &str = "https://docs.google.com/spreadsheets/d/1_XZeLcypMWq2FKuRCBQ6UWFcSX_vdTR51P63AqtbhCQ/export?format=csv";

pub const DEFAULT_COUNTRY: &str = "US";

// Render assigns the public port through $PORT; 10000 is their default.
pub const DEFAULT_KEEP_ALIVE_PORT: u16 = 10000;
