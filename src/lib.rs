/*!
# Poll Application

A single-question web poll with a Rust backend and a browser client.

## Overview

The server holds one poll in memory: a question, a fixed list of options and
a vote counter per option. Visitors vote once; the server remembers that a
browser has voted only through a `voted` cookie it hands back, so the server
itself keeps no per-client state. Clearing that cookie lets a browser vote
again, which is a known and accepted weakness of the design.

An administrator can zero every counter by presenting a shared admin token.

## Architecture

### Backend Layer
- **Technologies**: Rust, axum, tower-http
- **Key Components**:
  - Poll state - question, options and counters, owned by the router state
  - Vote handling - cookie check, option lookup, counter increment
  - Reset handling - token comparison, counter reset
  - Static serving - built frontend bundle with single-page-app fallback

### Frontend Layer
- **Technologies**: HTML, CSS, JavaScript
- Renders either the voting buttons or the results with percentages, and an
  admin reset form. The [`view`] module holds the same state machine in Rust.

## Modules

- **poll**: Poll and option types, voting and reset
- **api**: JSON bodies shared by the server and clients
- **error**: Error types and their HTTP mapping
- **config**: Environment configuration
- **view**: Client view state and percentage calculation
- **app**: Routing, handlers and middleware (`web` feature)

## REST API Endpoints

- `GET /api/poll` - Question, options and whether this client has voted
- `POST /api/vote` - Count a vote (`{"optionId": "b"}`) and set the `voted` cookie
- `POST /api/reset` - Zero all counters (`{"token": "..."}`)
- `GET /api/health` - Liveness probe
- anything else - The frontend entry document
*/

pub mod api;
pub mod config;
pub mod error;
pub mod poll;
pub mod view;

#[cfg(feature = "web")]
pub mod app;

/// Re-export the commonly used types at the crate root
pub use api::*;
pub use config::Config;
pub use error::{ConfigError, PollError};
pub use poll::{Poll, PollOption};
pub use view::{PollView, Screen};
