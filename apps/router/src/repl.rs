//! Interactive client loop over any async reader/writer pair.
//!
//! Each query runs in its own task under a `query` span carrying a fresh `query_id`,
//! so a panic while routing one query is reported and the loop carries on.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{error, info_span, warn, Instrument};
use uuid::Uuid;

use crate::response::Renderer;
use crate::routing::QueryRouter;

const BANNER: &str = "\
Agent Router CLI
Type your query (or 'exit' to quit).
Try: \"What is Bob's salary?\", \"who has the highest role\", \"employees in Japan\"
";

const LLM_QUESTION: &str = "Use LLM to parse your query before sending? (y/n): ";
const PROMPT: &str = "\n> ";

/// A router paired with the renderer that presents its results.
#[derive(Clone)]
pub struct Session {
    router: QueryRouter,
    renderer: Renderer,
}

impl Session {
    pub fn new(router: QueryRouter, renderer: Renderer) -> Self {
        Self { router, renderer }
    }

    async fn answer(&self, query: &str) -> String {
        let outcome = self.router.route(query).await;
        self.renderer.render(query, &outcome).await
    }
}

/// The sessions the user can choose between. `assisted` is absent without a
/// configured completion endpoint.
pub struct Modes {
    pub offline: Session,
    pub assisted: Option<Session>,
}

pub struct Repl<R, W> {
    input: R,
    output: W,
}

impl<R, W> Repl<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `exit` or end of input. `use_llm` skips the yes/no question.
    pub async fn run(&mut self, modes: Modes, use_llm: Option<bool>) -> std::io::Result<()> {
        self.write(BANNER).await?;

        let use_llm = match use_llm {
            Some(flag) => flag,
            None => self.ask_yes_no(LLM_QUESTION).await?,
        };
        let session = match (use_llm, modes.assisted) {
            (true, Some(assisted)) => assisted,
            (true, None) => {
                warn!("LLM assistance requested but API_URL is not configured");
                self.write("LLM assistance is not configured; using keyword routing.\n")
                    .await?;
                modes.offline
            }
            (false, _) => modes.offline,
        };

        while let Some(line) = self.prompt().await? {
            let query = line.trim();
            if query.eq_ignore_ascii_case("exit") {
                break;
            }
            if query.is_empty() {
                continue;
            }

            let answer = run_isolated(session.clone(), query.to_string()).await;
            self.write(&answer).await?;
            if !answer.ends_with('\n') {
                self.write("\n").await?;
            }
        }
        Ok(())
    }

    async fn ask_yes_no(&mut self, question: &str) -> std::io::Result<bool> {
        self.write(question).await?;
        let answer = self.read_line().await?.unwrap_or_default();
        Ok(answer.trim().to_lowercase().starts_with('y'))
    }

    async fn prompt(&mut self) -> std::io::Result<Option<String>> {
        self.write(PROMPT).await?;
        self.read_line().await
    }

    async fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).await?;
        Ok((read > 0).then_some(line))
    }

    async fn write(&mut self, text: &str) -> std::io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await
    }
}

async fn run_isolated(session: Session, query: String) -> String {
    let span = info_span!("query", query_id = %Uuid::new_v4());
    let task = tokio::spawn(async move { session.answer(&query).await }.instrument(span));
    match task.await {
        Ok(answer) => answer,
        Err(e) => {
            error!("Query task failed: {e}");
            "Error: the query could not be completed.".to_string()
        }
    }
}
