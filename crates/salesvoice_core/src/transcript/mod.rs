//! Boundary model of the external speech recognizer.
//!
//! The core performs no audio work; it only consumes the recognizer's text
//! updates and hands the finished command to the interpreter.

pub mod session;
