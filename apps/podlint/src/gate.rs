//! Preconditions checked before any linting starts.

use crate::error::PodlintError;

/// Identity of the host OS.
pub trait Platform {
    /// `pod` only runs on macOS.
    fn is_macos(&self) -> bool;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HostPlatform;

impl Platform for HostPlatform {
    fn is_macos(&self) -> bool {
        cfg!(target_os = "macos")
    }
}

/// Decides whether this CI shard should run the podspec lint at all.
pub trait ShardGate {
    fn should_run(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Position of this invocation among `count` parallel CI shards.
///
/// Podspec lint is not partitioned, so only shard 0 runs it.
pub struct ShardConfig {
    pub index: usize,
    pub count: usize,
}

impl Default for ShardConfig {
    fn default() -> Self {
        ShardConfig { index: 0, count: 1 }
    }
}

impl ShardConfig {
    pub fn new(index: usize, count: usize) -> Result<Self, PodlintError> {
        if count == 0 || index >= count {
            return Err(PodlintError::InvalidShard { index, count });
        }
        Ok(ShardConfig { index, count })
    }
}

impl ShardGate for ShardConfig {
    fn should_run(&self) -> bool {
        self.index == 0
    }
}
