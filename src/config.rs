use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Medirec";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Port the HTTP listener binds when `MEDIREC_PORT` is unset.
pub const DEFAULT_PORT: u16 = 8000;

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> String {
    "info".to_string()
}

/// Directory holding the reference CSV files.
/// `./data` unless overridden with `MEDIREC_DATA_DIR`.
pub fn data_dir() -> PathBuf {
    std::env::var_os("MEDIREC_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"))
}

/// Listen address: all interfaces, fixed port (`MEDIREC_PORT` override).
pub fn bind_addr() -> SocketAddr {
    let port = std::env::var("MEDIREC_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_defaults_to_repo_relative() {
        if std::env::var_os("MEDIREC_DATA_DIR").is_none() {
            assert_eq!(data_dir(), PathBuf::from("data"));
        }
    }

    #[test]
    fn bind_addr_listens_on_all_interfaces() {
        let addr = bind_addr();
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn app_name_is_medirec() {
        assert_eq!(APP_NAME, "Medirec");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
