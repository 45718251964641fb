/// Example configuration
pub const DEFAULT_CONFIG: &str = r#"
# Logging configuration
[log]
# Level can be "error", "warn", "info", "debug", or "trace"
level = "info"

# Compute service endpoint
[compute]
endpoint = "http://controller:8774/v2.1"
token = "your_api_token_here"

# Block storage service endpoint
[volume]
endpoint = "http://controller:8776/v3"
token = "your_api_token_here"
"#;
