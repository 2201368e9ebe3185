use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub port: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        // The API key must come from the environment, never from source.
        let gemini_api_key = env::var("GEMINI_API_KEY")?;
        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());

        Ok(Self {
            gemini_api_key,
            gemini_model,
            port,
        })
    }
}
