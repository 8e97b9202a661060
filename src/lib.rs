//! Verlet points, distance springs and pairwise collisions for secondary
//! motion in 2D scenes.
//!
//! `jiggle` animates point masses joined by distance constraints under
//! gravity, keeps them inside a rectangle and bounces them off each other.
//! It is meant for the elastic, physically-plausible wobble layered on top of
//! an otherwise scripted scene: a ball that squashes when it lands, a rope
//! that swings, a tail that trails behind.
//!
//! # Features
//!
//! - **Verlet integration**: Position-based dynamics with implicit velocity
//! - **Springs**: Mass-weighted distance constraints, iterative relaxation
//! - **Collisions**: Circle-circle separation with restitution impulses
//! - **Sub-stepping**: Stable positional corrections at frame-sized steps
//! - **Shapes**: Ropes and elastic rings in one call
//! - **Observable**: Monitor steps via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use jiggle::{System, Vec2};
//!
//! let mut system: System<f32> = System::new(400.0, 400.0);
//! let ball = system
//!     .create_ring(Vec2::new(200.0, 100.0), 30.0, 12, 3.0, 1.0, 1.0)
//!     .unwrap();
//! for _ in 0..120 {
//!     system.update(1.0 / 60.0);
//! }
//! let center = system.centroid(&ball).unwrap();
//! assert!(center.y > 100.0 && center.y < 400.0);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod point;
pub mod spring;
pub mod collision;
pub mod bounds;
pub mod system;
pub mod shapes;
pub mod render;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec2};
pub use point::Point;
pub use spring::Spring;
pub use collision::Contact;
pub use bounds::Bounds;
pub use system::System;
pub use render::{Canvas, Color};
pub use config::SystemConfig;
pub use observer::{StepObserver, NoOpStepObserver, TracingStepObserver};
pub use error::PhysicsError;
