use std::sync::Arc;

use tokio::io::BufReader;
use tokio::net::TcpStream;
use tracing::{debug, error};

use crate::http::parser;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::routing::{Dispatcher, Router};

/// Serves one accepted connection: parse a single request, route and
/// dispatch it, write the response, close. No keep-alive.
pub struct Connection {
    stream: TcpStream,
    router: Arc<Router>,
    dispatcher: Dispatcher,
}

impl Connection {
    pub fn new(stream: TcpStream, router: Arc<Router>, dispatcher: Dispatcher) -> Self {
        Self {
            stream,
            router,
            dispatcher,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        let (read_half, mut write_half) = self.stream.split();
        let mut reader = BufReader::new(read_half);

        let response = match parser::parse_request(&mut reader).await {
            Ok(request) => {
                debug!(method = %request.method, target = %request.target, "parsed request");

                match self.router.route(&request) {
                    Some(resource) => {
                        match self.dispatcher.dispatch(resource.as_ref(), &request) {
                            Ok(response) => response,
                            Err(e) => {
                                // Unexpected handler failure; the client
                                // gets a bare 500 with no detail.
                                error!(target = %request.target, error = %e, "handler failed");
                                Response::internal_error()
                            }
                        }
                    }
                    None => Response::not_implemented(),
                }
            }
            Err(e) => {
                debug!(error = %e, "rejecting malformed request");
                e.to_response()
            }
        };

        let mut writer = ResponseWriter::new(&response);
        writer.write_to_stream(&mut write_half).await?;

        Ok(())
    }
}
