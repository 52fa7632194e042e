//! Synthetic boundary-communication trace generation.
//!
//! Produces per-rank message logs emulating the boundary exchange of a
//! distributed mesh computation, for later replay by topology benchmark
//! tooling. Generation follows a ring-offset schedule: at timestep `t` each
//! rank exchanges a pair of messages with the rank `t + 1` positions around
//! the ring.
//!
//! Data flows one way through three pieces: [`RingSchedule`] decides who
//! talks to whom and how much, [`emit_exchange`] expands each exchange into
//! its four events, and [`Generator`] drives both over every timestep into a
//! [`commtrace_types::TraceSet`].
//!
//! # Example
//!
//! ```ignore
//! use commtrace_generator::{Generator, GeneratorConfig};
//!
//! let config = GeneratorConfig::new(4, 2).with_seed(42);
//! let traces = Generator::new(config)?.run()?;
//! assert_eq!(traces.total_events(), 32);
//! ```

pub mod config;
pub mod emitter;
pub mod ring;
pub mod runner;

pub use config::{ConfigError, GeneratorConfig};
pub use emitter::emit_exchange;
pub use ring::{draw_msg_size, Exchange, RingSchedule, MAX_MSG_SIZE_UNITS, MSG_SIZE_UNIT};
pub use runner::{Generator, GeneratorError};
