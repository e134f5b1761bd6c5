//! `lift-dispatch` — decides where every car goes and when its door moves.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                       |
//! |-----------------|----------------------------------------------------------------|
//! | [`model`]       | `Dispatcher` trait — the pluggable policy contract             |
//! | [`basic`]       | `BasicDispatcher` — per-car collective control                 |
//! | [`stop_queue`]  | `StopQueue` — ordered multiset of committed stops              |
//! | [`call_board`]  | `CallBoard` — up/down call flags, one pair per floor           |
//!
//! # Per-car phases (`BasicDispatcher`)
//!
//! Each tick, exactly one of these applies to each car, in priority order:
//!
//! ```text
//! ① Door open   — close once door_delay has elapsed; clear the call flag for
//!                 the car's direction at its floor.
//! ② Arrival     — at destination: reverse at a terminal, then open the door
//!                 if a matching call or the next committed stop is here.
//! ③ Cruising    — pick the next destination: nearest call ahead if it comes
//!                 before the next committed stop, else the committed stop,
//!                 else the terminal, else reverse.
//! ```
//!
//! A car that arrives with no reason to stop falls through to ③ in the same
//! tick.
//!
//! The call board and stop queues are private to the dispatcher.  Passengers
//! and UI collaborators reach them only through
//! [`Dispatcher::call_for_car`] and [`Dispatcher::request_floor_from_car`].

pub mod basic;
pub mod call_board;
pub mod model;
pub mod stop_queue;


pub use basic::BasicDispatcher;
pub use call_board::CallBoard;
pub use model::Dispatcher;
pub use stop_queue::StopQueue;
