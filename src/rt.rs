//! Accept loop.
//!
//! Every accepted connection runs on its own task, reading one request line with a
//! [`RequestReader`] and handing the outcome to the handler. Connections share nothing but the
//! handler.
use std::{
    io,
    net::SocketAddr,
    pin::Pin,
    sync::Arc,
    task::{Poll, ready},
    time::Duration,
};
use tokio::{
    io::AsyncRead,
    net::{TcpListener, TcpStream},
    time::Sleep,
};

#[cfg(unix)]
use tokio::net::{UnixListener, UnixStream};

use crate::{
    config::Config,
    driver::RequestReader,
    error::Error,
    log::{debug, error},
    request::Request,
};

// ===== Listener =====

pub trait Listener {
    type Stream: AsyncRead + Unpin + Send + 'static;

    type Addr: std::fmt::Debug + Send + 'static;

    fn poll_accept(
        &self,
        cx: &mut std::task::Context,
    ) -> Poll<io::Result<(Self::Stream, Self::Addr)>>;
}

impl Listener for TcpListener {
    type Stream = TcpStream;

    type Addr = SocketAddr;

    fn poll_accept(
        &self,
        cx: &mut std::task::Context,
    ) -> Poll<io::Result<(Self::Stream, Self::Addr)>> {
        TcpListener::poll_accept(self, cx)
    }
}

#[cfg(unix)]
impl Listener for UnixListener {
    type Stream = UnixStream;

    type Addr = tokio::net::unix::SocketAddr;

    fn poll_accept(
        &self,
        cx: &mut std::task::Context,
    ) -> Poll<io::Result<(Self::Stream, Self::Addr)>> {
        UnixListener::poll_accept(self, cx)
    }
}

// ===== Runtime =====

/// Delay before accepting again after an accept error.
pub const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Accept connections forever, calling `handler` with each connection request line.
///
/// Must be polled within a tokio runtime.
pub fn serve<L, F>(io: L, handler: F) -> Serve<L, F>
where
    L: Listener,
    F: Fn(L::Addr, Result<Request, Error>) + Send + Sync + 'static,
{
    Serve { io, handler: Arc::new(handler), config: Config::default(), backoff: None }
}

/// Future returned by [`serve`].
///
/// After an accept error, accepting resumes once [`ACCEPT_BACKOFF`] has elapsed.
#[derive(Debug)]
pub struct Serve<L, F> {
    io: L,
    handler: Arc<F>,
    config: Config,
    backoff: Option<Pin<Box<Sleep>>>,
}

impl<L, F> Unpin for Serve<L, F> {}

impl<L, F> Serve<L, F> {
    /// Set the [`Config`] for every connection.
    #[inline]
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }
}

impl<L, F> Future for Serve<L, F>
where
    L: Listener,
    F: Fn(L::Addr, Result<Request, Error>) + Send + Sync + 'static,
{
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut std::task::Context<'_>) -> Poll<Self::Output> {
        let me = self.get_mut();
        loop {
            if let Some(backoff) = me.backoff.as_mut() {
                ready!(backoff.as_mut().poll(cx));
                me.backoff = None;
            }

            match ready!(me.io.poll_accept(cx)) {
                Ok((io, addr)) => {
                    debug!("connection accepted from {addr:?}");
                    let handler = Arc::clone(&me.handler);
                    tokio::spawn(connection(io, addr, me.config, handler));
                },
                #[cfg_attr(not(feature = "log"), allow(unused_variables))]
                Err(err) => {
                    error!("failed to accept connection: {err}");
                    me.backoff = Some(Box::pin(tokio::time::sleep(ACCEPT_BACKOFF)));
                },
            }
        }
    }
}

// ===== Connection =====

async fn connection<IO, A, F>(io: IO, addr: A, config: Config, handler: Arc<F>)
where
    IO: AsyncRead + Unpin,
    A: std::fmt::Debug,
    F: Fn(A, Result<Request, Error>),
{
    let result = RequestReader::with_config(io, config).read_request_async().await;
    #[cfg(feature = "log")]
    if let Err(err) = &result {
        debug!("failed to read request from {addr:?}: {err}");
    }
    debug!("connection closed from {addr:?}");
    (*handler)(addr, result);
}
