//! End-to-end scenarios driving the presenter the way a form would.

mod scenarios;
mod support;
