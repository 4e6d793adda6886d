use cafe_service::config::{CafeConfig, DirectoryConfig};
use cafe_service::startup::Application;
use service_core::config::Config as CoreConfig;

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Spawn the service on a random port, serving the built-in directory.
    pub async fn spawn() -> Self {
        let config = CafeConfig {
            common: CoreConfig {
                port: 0,
                log_level: "warn".to_string(),
            },
            directory: DirectoryConfig { file: None },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }

    /// URL of the cafe endpoint with a raw query string appended verbatim.
    pub fn cafe_url(&self, query: &str) -> String {
        format!("{}/cafe?{}", self.address, query)
    }
}
