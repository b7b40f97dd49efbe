use async_trait::async_trait;

use super::{name_from_location, parse_off_thread, RecordSource};
use crate::config::NullConfig;
use crate::{DataError, Dataset};

/// Record source fetching a CSV resource over HTTP
pub struct HttpSource {
    url: String,
    name: String,
    http: reqwest::Client,
    null_config: NullConfig,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, null_config: NullConfig) -> Self {
        let url = url.into();
        let name = name_from_location(&url).to_string();
        Self {
            url,
            name,
            http: reqwest::Client::new(),
            null_config,
        }
    }
}

#[async_trait]
impl RecordSource for HttpSource {
    async fn load(&self) -> Result<Dataset, DataError> {
        tracing::info!("Fetching records from {}", self.url);
        let response = self.http.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::Transport {
                status: status.as_u16(),
                location: self.url.clone(),
            });
        }

        let text = response.text().await?;
        parse_off_thread(self.name.clone(), text, self.null_config.clone()).await
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single canned HTTP response and return the URL to fetch
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}/all_month.csv", addr)
    }

    #[tokio::test]
    async fn test_not_found_is_transport_error() {
        let url = serve_once("404 Not Found", "").await;
        let source = HttpSource::new(url, NullConfig::default());

        let err = source.load().await.unwrap_err();
        match &err {
            DataError::Transport { status, .. } => assert_eq!(*status, 404),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_success_parses_body() {
        let url = serve_once("200 OK", "latitude,longitude,depth,mag\n10.0,20.0,5.0,4.5\n").await;
        let source = HttpSource::new(url, NullConfig::default());
        assert_eq!(source.source_name(), "all_month.csv");

        let dataset = source.load().await.unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].longitude, 20.0);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // Bind then drop so the port is very likely closed
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = HttpSource::new(format!("http://{}/all_month.csv", addr), NullConfig::default());
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, DataError::Network(_)));
    }
}
