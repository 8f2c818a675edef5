//! Power Reserve - The robot's battery
//!
//! A Value Object with one invariant: `0 <= level <= capacity`.

/// Capacity used when none is configured
pub const DEFAULT_CAPACITY: u32 = 100;

/// Battery with a fixed capacity and a clamped charge level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerReserve {
    capacity: u32,
    level: u32,
}

impl PowerReserve {
    /// Create a fully charged reserve
    pub fn new(capacity: u32) -> Result<Self, PowerError> {
        Self::with_level(capacity, capacity)
    }

    /// Create a reserve at a given charge, clamped to `capacity`
    pub fn with_level(capacity: u32, level: u32) -> Result<Self, PowerError> {
        if capacity == 0 {
            return Err(PowerError::ZeroCapacity);
        }
        Ok(Self {
            capacity,
            level: level.min(capacity),
        })
    }

    // ========== Getters ==========

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Charge units making up `percent` of capacity, at least one
    pub fn units_for_percent(&self, percent: u32) -> u32 {
        let units = u64::from(self.capacity) * u64::from(percent) / 100;
        (units as u32).max(1)
    }

    /// Snapshot for display
    pub fn status(&self) -> PowerStatus {
        PowerStatus {
            level: self.level,
            capacity: self.capacity,
        }
    }

    // ========== Mutations ==========

    /// Remove charge, stopping at zero
    pub fn drain(&mut self, amount: u32) {
        self.level = self.level.saturating_sub(amount);
    }

    /// Refill to capacity
    pub fn recharge(&mut self) {
        self.level = self.capacity;
    }
}

impl Default for PowerReserve {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            level: DEFAULT_CAPACITY,
        }
    }
}

/// Read-only view of a reserve at one moment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerStatus {
    pub level: u32,
    pub capacity: u32,
}

impl PowerStatus {
    /// Charge as a whole percentage of capacity (rounded down)
    pub fn percent(&self) -> u32 {
        let pct = u64::from(self.level) * 100 / u64::from(self.capacity.max(1));
        pct as u32
    }
}

impl core::fmt::Display for PowerStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Battery level: {}%", self.percent())
    }
}

/// Errors that can occur when building a reserve
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PowerError {
    ZeroCapacity,
}

impl core::fmt::Display for PowerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PowerError::ZeroCapacity => write!(f, "Battery capacity must be greater than zero"),
        }
    }
}

impl std::error::Error for PowerError {}
