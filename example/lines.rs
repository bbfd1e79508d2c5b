use futures_util::StreamExt;
use reqline::LinesStream;
use std::io;
use tokio::net::TcpListener;

mod config;

#[tokio::main]
async fn main() -> io::Result<()> {
    env_logger::init();

    let env = config::Env::load()?;
    let io = TcpListener::bind(&env.addr).await?;
    log::info!("listening on {}", env.addr);

    loop {
        let (stream, addr) = io.accept().await?;
        println!("A connection has been accepted");

        let config = env.config;
        tokio::spawn(async move {
            let mut lines = LinesStream::with_config(stream, config);
            while let Some(line) = lines.next().await {
                match line {
                    Ok(line) => println!("{line}"),
                    Err(err) => {
                        log::error!("{addr}: {err}");
                        break;
                    }
                }
            }
            println!("A connection has been closed");
        });
    }
}
