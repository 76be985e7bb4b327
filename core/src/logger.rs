// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::{Arguments, Debug};

use http::Extensions;

/// ContextLogger is used for context-enabled diagnostic logging.
///
/// `ctx` carries the extensions of the request being handled, so an
/// implementation can pick up request scoped values such as trace ids.
///
/// A single logger is shared by every request that goes through a client,
/// implementations must be safe for concurrent use and should never block.
pub trait ContextLogger: Debug + Send + Sync + 'static {
    /// Log a formatted message.
    fn log(&self, ctx: &Extensions, args: Arguments<'_>);
}

/// DiscardLogger drops every message.
///
/// This is used when no logger is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardLogger;

impl ContextLogger for DiscardLogger {
    fn log(&self, _: &Extensions, _: Arguments<'_>) {}
}

/// LogLogger forwards messages to the [`log`] facade and ignores the context.
#[derive(Debug, Clone, Copy)]
pub struct LogLogger {
    level: log::Level,
}

impl Default for LogLogger {
    fn default() -> Self {
        Self {
            level: log::Level::Debug,
        }
    }
}

impl LogLogger {
    /// Create a new LogLogger that logs at debug level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the level messages are logged at.
    pub fn with_level(mut self, level: log::Level) -> Self {
        self.level = level;
        self
    }
}

impl ContextLogger for LogLogger {
    fn log(&self, _: &Extensions, args: Arguments<'_>) {
        log::log!(target: "signclient", self.level, "{args}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone)]
    struct TraceId(&'static str);

    #[derive(Debug, Default)]
    struct RecordLogger {
        lines: Mutex<Vec<String>>,
    }

    impl ContextLogger for RecordLogger {
        fn log(&self, ctx: &Extensions, args: Arguments<'_>) {
            let id = ctx.get::<TraceId>().map(|v| v.0).unwrap_or("-");
            self.lines
                .lock()
                .expect("lock poisoned")
                .push(format!("[{id}] {args}"));
        }
    }

    #[test]
    fn test_logger_sees_context() {
        let logger = RecordLogger::default();

        let mut ctx = Extensions::new();
        logger.log(&ctx, format_args!("latency: {} ms", 3));
        ctx.insert(TraceId("abc"));
        logger.log(&ctx, format_args!("latency: {} ms", 4));

        assert_eq!(
            *logger.lines.lock().unwrap(),
            vec!["[-] latency: 3 ms".to_string(), "[abc] latency: 4 ms".to_string()]
        );
    }

    #[test]
    fn test_builtin_loggers_never_fail() {
        let _ = env_logger::builder().is_test(true).try_init();

        let ctx = Extensions::new();
        DiscardLogger.log(&ctx, format_args!("dropped {}", "message"));
        LogLogger::new()
            .with_level(log::Level::Trace)
            .log(&ctx, format_args!("forwarded {}", "message"));
    }
}
