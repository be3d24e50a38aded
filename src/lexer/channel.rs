//! Threaded token transport.
//!
//! Runs a [`Scanner`] on its own thread and hands tokens to the consumer over a
//! zero-capacity channel: every send blocks until the consumer has received
//! the token, so at most one token is ever in flight. The channel closes right
//! after the terminal token.

use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread::{self, JoinHandle};

use super::scanner::Scanner;
use super::token::Token;
use crate::error::{Error, Result};

const THREAD_NAME: &str = "listlex-scanner";

/// Handle to a scanner running on a background thread
#[derive(Debug)]
pub struct LexHandle {
    name: String,
    thread: JoinHandle<usize>,
}

impl LexHandle {
    /// Diagnostic name of this scan
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True once the producer thread has exited
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Waits for the producer and returns how many tokens it handed over.
    ///
    /// Blocks forever if the stream is still alive but no longer read.
    pub fn join(self) -> Result<usize> {
        self.thread
            .join()
            .map_err(|_| Error::ProducerPanicked { name: self.name })
    }
}

/// Receiving end of a threaded scan
#[derive(Debug)]
pub struct TokenStream {
    rx: Receiver<Token>,
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.rx.recv().ok()
    }
}

/// Starts scanning `input` on a new thread.
pub fn lex_threaded(
    name: impl Into<String>,
    input: impl Into<String>,
) -> Result<(LexHandle, TokenStream)> {
    let name = name.into();
    let input = input.into();
    let (tx, rx) = mpsc::sync_channel(0);

    let producer_name = name.clone();
    let thread = thread::Builder::new()
        .name(THREAD_NAME.to_string())
        .spawn(move || produce(&producer_name, &input, tx))
        .map_err(|e| Error::Spawn {
            name: name.clone(),
            message: e.to_string(),
        })?;

    Ok((LexHandle { name, thread }, TokenStream { rx }))
}

fn produce(name: &str, input: &str, tx: SyncSender<Token>) -> usize {
    tracing::debug!(name = name, "producer started");
    let mut sent = 0;
    for token in Scanner::new(name, input) {
        if tx.send(token).is_err() {
            tracing::debug!(name = name, sent, "consumer hung up");
            return sent;
        }
        sent += 1;
    }
    tracing::debug!(name = name, sent, "producer finished");
    sent
}
