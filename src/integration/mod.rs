use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::{fs::File, net::SocketAddr};

use axum::http::HeaderValue;
use axum::http::header::InvalidHeaderValue;
use axum_server::tls_openssl::OpenSSLConfig;
use dotenv::dotenv;
use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, TermLogger, TerminalMode, WriteLogger};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin};

use crate::offline;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq)]
pub enum Env {
    Local,
    Dev,
    Stage,
    Production,
}

impl FromStr for Env {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "local" => Ok(Env::Local),
            "dev" => Ok(Env::Dev),
            "stg" => Ok(Env::Stage),
            "prod" => Ok(Env::Production),
            _ => Err(Error::InvalidEnv(s.to_owned())),
        }
    }
}

impl Env {
    pub fn addr(&self) -> SocketAddr {
        match self {
            Env::Local => SocketAddr::from(([127, 0, 0, 1], 8000)),
            Env::Dev | Env::Stage => SocketAddr::from(([0, 0, 0, 0], 8000)),
            Env::Production => SocketAddr::from(([0, 0, 0, 0], 8443)),
        }
    }

    pub fn ssl_config(&self) -> Result<Option<OpenSSLConfig>> {
        match self {
            Env::Local | Env::Dev | Env::Stage => Ok(None),
            Env::Production => {
                let ssl_config = OpenSSLConfig::from_pem_file(
                    env::var("SSL_CERT_FILE")?,
                    env::var("SSL_KEY_FILE")?,
                )?;
                Ok(Some(ssl_config))
            }
        }
    }

    pub fn allow_origin(&self) -> Result<AllowOrigin> {
        self.allow_origin_with(|key: &str| env::var(key))
    }

    pub fn allow_origin_with<F>(&self, lookup: F) -> Result<AllowOrigin>
    where
        F: Fn(&str) -> std::result::Result<String, env::VarError>,
    {
        match self {
            Env::Local | Env::Dev => Ok(AllowOrigin::any()),
            Env::Stage | Env::Production => {
                let origins = lookup("ALLOW_ORIGIN")?
                    .split(',')
                    .map(HeaderValue::from_str)
                    .collect::<std::result::Result<Vec<HeaderValue>, _>>()?;
                Ok(AllowOrigin::list(origins))
            }
        }
    }

    pub fn allow_methods(&self) -> AllowMethods {
        AllowMethods::any()
    }

    pub fn allow_headers(&self) -> AllowHeaders {
        AllowHeaders::any()
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub env: Env,
    pub static_dir: PathBuf,
    pub index_html: Option<PathBuf>,
    pub offline: offline::Config,
}

impl Config {
    /// Reads configuration from the process environment, `.env` included.
    pub fn env() -> Result<Self> {
        dotenv().ok();

        Self::from_lookup(|key: &str| env::var(key))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<String, env::VarError>,
    {
        let env = match lookup("ENV") {
            Ok(env) => env.parse()?,
            Err(env::VarError::NotPresent) => Env::Local,
            Err(e) => return Err(e.into()),
        };
        let static_dir = PathBuf::from(lookup("STATIC_DIR").unwrap_or("static".into()));
        let index_html = lookup("INDEX_HTML").ok().map(PathBuf::from);
        let offline = offline::Config::from_lookup(&env, static_dir.clone(), &lookup)?;

        Ok(Self {
            env,
            static_dir,
            index_html,
            offline,
        })
    }
}

pub fn init_logger() -> Result<()> {
    dotenv().ok();

    let rust_log = env::var("RUST_LOG").unwrap_or("info".into());
    let level = LevelFilter::from_str(&rust_log).unwrap_or(LevelFilter::Info);
    let log_file = env::var("SERVICE_NAME")
        .map(|pkg| format!("{pkg}.log"))
        .unwrap_or("service.log".into());

    CombinedLogger::init(vec![
        TermLogger::new(
            level,
            simplelog::Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(level, simplelog::Config::default(), File::create(log_file)?),
    ])?;

    Ok(())
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid environment: {0}")]
    InvalidEnv(String),

    #[error(transparent)]
    _Var(#[from] env::VarError),

    #[error(transparent)]
    _ParseBool(#[from] std::str::ParseBoolError),

    #[error(transparent)]
    _Io(#[from] std::io::Error),

    #[error(transparent)]
    _Logger(#[from] log::SetLoggerError),

    #[error(transparent)]
    _InvalidHeader(#[from] InvalidHeaderValue),
}
