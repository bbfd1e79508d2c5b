use std::io;

use reqline::Config;

const DEFAULT_ADDR: &str = "0.0.0.0:42069";

/// Settings read from the environment, after loading `.env` if present.
pub struct Env {
    /// `REQLINE_ADDR`
    pub addr: String,
    /// `REQLINE_BUFFER_SIZE`
    pub config: Config,
}

impl Env {
    pub fn load() -> io::Result<Env> {
        dotenvy::dotenv().ok();

        let addr = std::env::var("REQLINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_owned());

        let mut config = Config::default();
        if let Ok(size) = std::env::var("REQLINE_BUFFER_SIZE") {
            let size = size.parse::<usize>().map_err(|err| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("invalid REQLINE_BUFFER_SIZE {size:?}: {err}"),
                )
            })?;
            config = config.initial_capacity(size);
        }

        Ok(Env { addr, config })
    }
}
