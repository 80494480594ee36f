#[cfg(test)]
mod tests {
    use aq_scraper::config::SourceConfig;
    use aq_scraper::error::ScraperError;
    use aq_scraper::source::HttpSensorSource;
    use aq_scraper::types::SensorSource;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single canned HTTP response on a random local port.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{addr}/api/liveSensors?sensorSource=all")
    }

    fn source_for(url: String) -> HttpSensorSource {
        HttpSensorSource::new(&SourceConfig {
            url,
            timeout_seconds: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetches_json_array() {
        let url = serve_once(
            "200 OK",
            r#"[{"PM2_5": 3.5, "Latitude": 40.7, "Longitude": -111.9, "time": "Mon 1 Jan 2020 00:00:00 MST"}]"#,
        )
        .await;

        let records = source_for(url).fetch_records().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["time"], "Mon 1 Jan 2020 00:00:00 MST");
    }

    #[tokio::test]
    async fn test_non_success_status_is_transport_error() {
        let url = serve_once("500 Internal Server Error", r#"{"error": "boom"}"#).await;

        let err = source_for(url.clone()).fetch_records().await.unwrap_err();
        match err {
            ScraperError::Transport { status, url: failed } => {
                assert_eq!(status, 500);
                assert_eq!(failed, url);
            }
            other => panic!("expected Transport error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_array_body_is_json_error() {
        let url = serve_once("200 OK", r#"{"sensors": []}"#).await;
        let err = source_for(url).fetch_records().await.unwrap_err();
        assert!(matches!(err, ScraperError::Json(_)));
    }
}
