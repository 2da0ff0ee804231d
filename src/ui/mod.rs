//! User interface and presentation
//!
//! Draws the hand-held's LCD as text. Presenters read engine snapshots and
//! never change them.

pub mod presenters;
