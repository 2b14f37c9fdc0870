use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "NPP_Contract_Management_API.postman_collection.json";
pub const DEFAULT_BASE_URL: &str = "http://34.9.77.60:8081/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub output: PathBuf,
    /// Default value of the `baseUrl` collection variable.
    pub base_url: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
