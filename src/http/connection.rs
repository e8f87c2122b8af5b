use bytes::BytesMut;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};

use crate::files::Dispatcher;
use crate::http::parser::parse_http_request;
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;

pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    read_buffer_size: usize,
    dispatcher: Arc<Dispatcher>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, dispatcher: Arc<Dispatcher>, read_buffer_size: usize) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(read_buffer_size),
            read_buffer_size,
            dispatcher,
            state: ConnectionState::Reading,
        }
    }

    /// Serves requests until the peer closes its side of the connection.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_request().await? {
                        Some(req) => {
                            self.state = ConnectionState::Processing(req);
                        }
                        None => {
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Processing(req) => {
                    let response = self.dispatcher.dispatch(req).await;
                    tracing::info!(
                        method = req.method.as_str(),
                        url = %req.url,
                        status = response.status.as_u16(),
                        "Request served"
                    );

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Reading;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads one chunk and parses it as a complete request.
    ///
    /// Returns `None` once the peer has closed the connection.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        self.buffer.resize(self.read_buffer_size, 0);

        let n = self.stream.read(&mut self.buffer[..]).await?;
        if n == 0 {
            return Ok(None);
        }

        let text = String::from_utf8_lossy(&self.buffer[..n]);
        tracing::debug!(request = %text, "Received request");

        Ok(Some(parse_http_request(&text)))
    }
}
