use std::io;
use tokio::net::TcpListener;

mod config;

#[tokio::main]
async fn main() -> io::Result<()> {
    env_logger::init();

    let env = config::Env::load()?;
    let io = TcpListener::bind(&env.addr).await?;
    log::info!("listening on {}", env.addr);

    reqline::rt::serve(io, |addr, result| match result {
        Ok(request) => {
            let Some(line) = request.request_line() else {
                return;
            };
            println!("Request line:");
            println!("- Method: {}", String::from_utf8_lossy(line.method()));
            println!("- Target: {}", String::from_utf8_lossy(line.request_target()));
            println!("- Version: {}", line.http_version_str());
        }
        Err(err) => {
            log::warn!("{addr}: {err}");
            println!("Error: {err}");
        }
    })
    .config(env.config)
    .await;

    Ok(())
}
