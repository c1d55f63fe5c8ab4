#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tickup::api::clickup::{epoch_ms, ClickUp, ClickUpConfig};
    use tickup::api::Registrar;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    fn at(h: u32, min: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack.windows(needle.len()).position(|window| window == needle)
    }

    // Reads one full request: headers, then Content-Length body bytes.
    async fn read_request(stream: &mut TcpStream) -> String {
        let mut data = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = stream.read(&mut buf).await.unwrap();
            assert!(n > 0, "connection closed before request was complete");
            data.extend_from_slice(&buf[..n]);

            if let Some(pos) = find(&data, b"\r\n\r\n") {
                let headers = String::from_utf8_lossy(&data[..pos]).to_ascii_lowercase();
                let content_length = headers
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .map(|value| value.trim().parse::<usize>().unwrap())
                    .unwrap_or(0);

                while data.len() < pos + 4 + content_length {
                    let n = stream.read(&mut buf).await.unwrap();
                    assert!(n > 0, "connection closed before body was complete");
                    data.extend_from_slice(&buf[..n]);
                }
                return String::from_utf8_lossy(&data).to_string();
            }
        }
    }

    // One-shot HTTP server: answers a single request with the given status
    // line and JSON body, returning the raw request it received.
    async fn spawn_server(status_line: &'static str, body: &'static str) -> (ClickUpConfig, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let config = ClickUpConfig {
            api_url: format!("http://{}/api/v2", addr),
        };

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let request = read_request(&mut stream).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
            request
        });

        (config, handle)
    }

    #[tokio::test]
    async fn test_success_mapping_and_wire_shape() {
        let (config, server) = spawn_server("200 OK", r#"{"id":"4215"}"#).await;
        let clickup = ClickUp::new(&config, "pk_test_key");

        let result = clickup
            .register("https://app.clickup.com/459155/AQPOPS-372", at(8, 0), at(9, 0))
            .await
            .unwrap();

        assert_eq!(result.status_code, 200);
        assert_eq!(result.message, "Task AQPOPS-372 registered successfully.");

        let request = server.await.unwrap();
        let request_line = request.lines().next().unwrap();
        assert_eq!(
            request_line,
            "POST /api/v2/team/459155/time_entries?custom_task_ids=true&team_id=459155 HTTP/1.1"
        );

        let headers = request.to_ascii_lowercase();
        assert!(headers.contains("authorization: pk_test_key"));
        assert!(headers.contains("content-type: application/json"));

        let body_start = request.find("\r\n\r\n").unwrap() + 4;
        let body: serde_json::Value = serde_json::from_str(&request[body_start..]).unwrap();
        assert_eq!(body["tid"], "AQPOPS-372");
        assert_eq!(body["duration"], 3_600_000);
        assert_eq!(body["start"], epoch_ms(at(8, 0)));
    }

    #[tokio::test]
    async fn test_rejection_maps_err_field() {
        let (config, server) = spawn_server("500 Internal Server Error", r#"{"err":"not found"}"#).await;
        let clickup = ClickUp::new(&config, "pk_test_key");

        let result = clickup
            .register("https://app.clickup.com/459155/AQPOPS-372", at(8, 0), at(9, 0))
            .await
            .unwrap();

        assert_eq!(result.status_code, 500);
        assert_eq!(result.message, "not found");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_rejection_without_err_field_yields_empty_message() {
        let (config, server) = spawn_server("401 Unauthorized", r#"{"ECODE":"OAUTH_017"}"#).await;
        let clickup = ClickUp::new(&config, "pk_test_key");

        let result = clickup
            .register("https://app.clickup.com/459155/AQPOPS-372", at(8, 0), at(9, 0))
            .await
            .unwrap();

        assert_eq!(result.status_code, 401);
        assert_eq!(result.message, "");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_short_url_sends_empty_team_segment() {
        let (config, server) = spawn_server("400 Bad Request", r#"{"err":"Team not authorized"}"#).await;
        let clickup = ClickUp::new(&config, "pk_test_key");

        let result = clickup
            .register("https://app.clickup.com/t/AQPOPS-372", at(8, 0), at(9, 0))
            .await
            .unwrap();

        assert_eq!(result.status_code, 400);
        assert_eq!(result.message, "Team not authorized");

        let request = server.await.unwrap();
        let request_line = request.lines().next().unwrap();
        assert_eq!(
            request_line,
            "POST /api/v2/team//time_entries?custom_task_ids=true&team_id= HTTP/1.1"
        );
    }
}
