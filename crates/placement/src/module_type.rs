//! Module type descriptors: what can be placed, what it costs, where it may
//! go and which controller hooks it takes part in.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coord::Coordinate;
use crate::grid::PlacementGrid;
use crate::results::RejectReason;

/// Opaque identifier of a registered module type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleTypeId(String);

impl ModuleTypeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModuleTypeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ModuleTypeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModuleCategory {
    Infrastructure,
    Residential,
    Commercial,
    Industrial,
    Utility,
}

impl ModuleCategory {
    pub fn label(self) -> &'static str {
        match self {
            ModuleCategory::Infrastructure => "Infrastructure",
            ModuleCategory::Residential => "Residential",
            ModuleCategory::Commercial => "Commercial",
            ModuleCategory::Industrial => "Industrial",
            ModuleCategory::Utility => "Utility",
        }
    }
}

/// Display data shown on toolbars and tooltips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleInfo {
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
    pub cost: f64,
    pub category: ModuleCategory,
}

/// Where a module type may be placed, on top of "inside the grid bounds and
/// not already occupied", which every rule requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementRule {
    FreeCell,
    /// At least one cardinal neighbour holds an instance of this type.
    AdjacentTo(ModuleTypeId),
}

/// Optional controller hooks a module type opts into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Receives hover feedback for preview rendering.
    Preview,
    /// Notified on every fixed simulation tick.
    Tick,
    /// Supports drag (line) placement.
    Drag,
}

/// Opaque, never-reused identifier of a placed instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u64);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A module instance occupying one cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedInstance {
    pub instance_id: InstanceId,
    pub type_id: ModuleTypeId,
    pub coord: Coordinate,
    pub cost: f64,
}

/// A placeable kind of city object. Immutable once registered.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleType {
    id: ModuleTypeId,
    info: ModuleInfo,
    rule: PlacementRule,
    capabilities: Vec<Capability>,
}

impl ModuleType {
    /// A free-cell module type with no optional capabilities.
    ///
    /// Negative costs are clamped to zero.
    pub fn new(id: impl Into<ModuleTypeId>, mut info: ModuleInfo) -> Self {
        info.cost = info.cost.max(0.0);
        Self {
            id: id.into(),
            info,
            rule: PlacementRule::FreeCell,
            capabilities: Vec::new(),
        }
    }

    pub fn with_rule(mut self, rule: PlacementRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_capabilities(mut self, capabilities: &[Capability]) -> Self {
        for cap in capabilities {
            if !self.capabilities.contains(cap) {
                self.capabilities.push(*cap);
            }
        }
        self
    }

    pub fn id(&self) -> &ModuleTypeId {
        &self.id
    }

    pub fn info(&self) -> &ModuleInfo {
        &self.info
    }

    pub fn cost(&self) -> f64 {
        self.info.cost
    }

    pub fn category(&self) -> ModuleCategory {
        self.info.category
    }

    pub fn rule(&self) -> &PlacementRule {
        &self.rule
    }

    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    pub fn supports(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// Check whether `coord` accepts an instance of this type, reporting the
    /// first reason it does not.
    pub fn check(&self, coord: Coordinate, grid: &PlacementGrid) -> Result<(), RejectReason> {
        if !grid.in_bounds(coord) {
            return Err(RejectReason::OutOfBounds(coord));
        }
        if !grid.is_free(coord) {
            return Err(RejectReason::CellOccupied(coord));
        }
        match &self.rule {
            PlacementRule::FreeCell => Ok(()),
            PlacementRule::AdjacentTo(neighbour_type) => {
                let touches = coord.neighbors4().any(|n| {
                    grid.occupant_at(n)
                        .is_some_and(|occupant| &occupant.type_id == neighbour_type)
                });
                if touches {
                    Ok(())
                } else {
                    Err(RejectReason::RuleNotMet(coord))
                }
            }
        }
    }

    pub fn validate(&self, coord: Coordinate, grid: &PlacementGrid) -> bool {
        self.check(coord, grid).is_ok()
    }

    /// Build the instance this type places at `coord`. Only the controller
    /// calls this, after validation, with a freshly issued id.
    pub fn instantiate(&self, instance_id: InstanceId, coord: Coordinate) -> PlacedInstance {
        PlacedInstance {
            instance_id,
            type_id: self.id.clone(),
            coord,
            cost: self.info.cost,
        }
    }
}
