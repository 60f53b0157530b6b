use std::fs;
use tracing::info;

const MOCK_FEED: &str = "03.Jan.2024 #1
Country|Currency|Amount|Code|Rate
EMU|euro|1|EUR|24.260
USA|dollar|1|USD|22.456
United Kingdom|pound|1|GBP|28.345
";

mod test_utils {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub async fn create_cnb_mock_server(mock_response: &str, status_code: u16) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/daily.txt"))
            .respond_with(ResponseTemplate::new(status_code).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    pub fn write_config(dir: &tempfile::TempDir, base_url: &str) -> std::path::PathBuf {
        let config_path = dir.path().join("config.yaml");
        let config_content = format!(
            r#"
providers:
  cnb:
    base_url: {base_url}
default_currency: "EUR"
default_amount: 500.0
"#
        );
        std::fs::write(&config_path, config_content).expect("Failed to write config file");
        config_path
    }
}

#[test_log::test(tokio::test)]
async fn test_full_app_flow_with_cnb_mock() {
    let mock_server = test_utils::create_cnb_mock_server(MOCK_FEED, 200).await;
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_path = test_utils::write_config(&temp_dir, &mock_server.uri());
    let config_path = config_path.to_str().unwrap();

    for command in [
        cnbfx::AppCommand::Rates { json: false },
        cnbfx::AppCommand::Rates { json: true },
        cnbfx::AppCommand::Currencies,
        cnbfx::AppCommand::Convert {
            amount: None,
            currency: None,
        },
        cnbfx::AppCommand::Convert {
            amount: Some("100".to_string()),
            currency: Some("gbp".to_string()),
        },
    ] {
        info!(?command, "Running command against mock CNB server");
        let result = cnbfx::run_command(command.clone(), Some(config_path), None).await;
        assert!(
            result.is_ok(),
            "{command:?} failed with: {:?}",
            result.err()
        );
    }
}

#[test_log::test(tokio::test)]
async fn test_invalid_amount_is_not_an_error() {
    let mock_server = test_utils::create_cnb_mock_server(MOCK_FEED, 200).await;
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_path = test_utils::write_config(&temp_dir, &mock_server.uri());

    let result = cnbfx::run_command(
        cnbfx::AppCommand::Convert {
            amount: Some("-10".to_string()),
            currency: None,
        },
        Some(config_path.to_str().unwrap()),
        None,
    )
    .await;
    assert!(result.is_ok(), "{:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_unknown_currency_fails() {
    let mock_server = test_utils::create_cnb_mock_server(MOCK_FEED, 200).await;
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_path = test_utils::write_config(&temp_dir, &mock_server.uri());

    let result = cnbfx::run_command(
        cnbfx::AppCommand::Convert {
            amount: Some("100".to_string()),
            currency: Some("JPY".to_string()),
        },
        Some(config_path.to_str().unwrap()),
        None,
    )
    .await;
    assert_eq!(
        result.unwrap_err().to_string(),
        "Currency JPY not found in fixing 03.Jan.2024"
    );
}

#[test_log::test(tokio::test)]
async fn test_malformed_feed_fails() {
    let mock_server = test_utils::create_cnb_mock_server("03.Jan.2024\nheader\nrow", 200).await;
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_path = test_utils::write_config(&temp_dir, &mock_server.uri());

    let result = cnbfx::run_command(
        cnbfx::AppCommand::Currencies,
        Some(config_path.to_str().unwrap()),
        None,
    )
    .await;
    let err = result.unwrap_err();
    assert!(err.downcast_ref::<cnbfx::core::FormatError>().is_some());
    assert_eq!(
        err.to_string(),
        "Invalid CNB data format: could not parse date and sequence"
    );
}

#[test_log::test(tokio::test)]
async fn test_server_error_fails() {
    let mock_server = test_utils::create_cnb_mock_server("Server Error", 503).await;
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_path = test_utils::write_config(&temp_dir, &mock_server.uri());

    let result = cnbfx::run_command(
        cnbfx::AppCommand::Rates { json: false },
        Some(config_path.to_str().unwrap()),
        None,
    )
    .await;
    assert!(result.unwrap_err().to_string().starts_with("HTTP error: 503"));
}

#[test_log::test(tokio::test)]
async fn test_full_app_flow_with_rates_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let rates_path = temp_dir.path().join("daily.txt");
    fs::write(&rates_path, MOCK_FEED).unwrap();

    // Unreachable provider URL proves the file is used instead
    let config_path = test_utils::write_config(&temp_dir, "http://127.0.0.1:9");

    let result = cnbfx::run_command(
        cnbfx::AppCommand::Convert {
            amount: Some("1000".to_string()),
            currency: Some("USD".to_string()),
        },
        Some(config_path.to_str().unwrap()),
        Some(rates_path.to_str().unwrap()),
    )
    .await;
    assert!(result.is_ok(), "{:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_missing_config_file_fails() {
    let result = cnbfx::run_command(
        cnbfx::AppCommand::Currencies,
        Some("/nonexistent/cnbfx/config.yaml"),
        None,
    )
    .await;
    assert!(
        result
            .unwrap_err()
            .to_string()
            .starts_with("Failed to read config file")
    );
}
