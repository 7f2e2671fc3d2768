//! # Project Data Structures
//!
//! The `Project` struct is the root container for all sizing-study data.
//! Projects serialize to `.cmv` (cable medium-voltage) files as
//! human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── site: SiteConditions (soil, network and load parameters)
//! └── circuits: Vec<Circuit> (feeders, each an ordered run of segments)
//! ```
//!
//! Segments are ordered within a circuit, and loads accumulate along the
//! run: the design power a segment carries is the running total of tapped
//! loads up to and including its own, so [`Circuit::design_power_at`]
//! depends on segment order.
//!
//! ## Example
//!
//! ```rust
//! use cable_core::project::{Project, Circuit, Segment};
//!
//! let mut project = Project::new("Jane Engineer", "25-042", "ACME Utility");
//! let mut feeder = Circuit::new("Feeder A");
//! feeder.segments.push(Segment::default());
//! project.add_circuit(feeder);
//!
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! assert!(json.contains("Feeder A"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cable::{
    Armouring, Conductor, CoreConstruction, Insulation, InstallationMethod, Layout, VoltageRating,
};

/// Current schema version for .cmv files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
///
/// This is the top-level struct that gets serialized to `.cmv` files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// Site-wide soil, network and load parameters
    pub site: SiteConditions,

    /// All feeders in the study, each an ordered run of segments
    pub circuits: Vec<Circuit>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cable_core::project::Project;
    ///
    /// let project = Project::new("John Doe", "25-001", "Client Corp");
    /// assert_eq!(project.meta.engineer, "John Doe");
    /// assert!(project.circuits.is_empty());
    /// ```
    pub fn new(
        engineer: impl Into<String>,
        job_id: impl Into<String>,
        client: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            site: SiteConditions::default(),
            circuits: Vec::new(),
        }
    }

    /// Add a feeder to the project. Returns its UUID.
    pub fn add_circuit(&mut self, circuit: Circuit) -> Uuid {
        let id = circuit.id;
        self.circuits.push(circuit);
        self.touch();
        id
    }

    /// Remove a feeder by UUID. Returns the removed feeder if it existed.
    pub fn remove_circuit(&mut self, id: &Uuid) -> Option<Circuit> {
        let idx = self.circuits.iter().position(|c| c.id == *id)?;
        self.touch();
        Some(self.circuits.remove(idx))
    }

    /// Get a feeder by UUID.
    pub fn get_circuit(&self, id: &Uuid) -> Option<&Circuit> {
        self.circuits.iter().find(|c| c.id == *id)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn circuit_count(&self) -> usize {
        self.circuits.len()
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Site-wide soil, network and load parameters shared by every segment
/// check in the project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConditions {
    /// Ground temperature at burial depth, degC
    pub ground_temp_c: f64,

    /// Soil thermal resistivity, K.m/W
    pub soil_resistivity_km_w: f64,

    /// Nominal system voltage, kV (line-to-line)
    pub system_voltage_kv: f64,

    /// System frequency, Hz
    pub frequency_hz: f64,

    /// Load power factor, 0..1
    pub power_factor: f64,

    /// Design margin applied to the load current, percent
    pub oversizing_pct: f64,
}

impl Default for SiteConditions {
    fn default() -> Self {
        SiteConditions {
            ground_temp_c: 20.0,
            soil_resistivity_km_w: 1.5,
            system_voltage_kv: 30.0,
            frequency_hz: 50.0,
            power_factor: 0.9,
            oversizing_pct: 0.0,
        }
    }
}

/// One feeder: an ordered run of cable segments from source to the last tap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circuit {
    pub id: Uuid,

    /// Display name (e.g., "Feeder A")
    pub label: String,

    /// Segments in route order, source first
    pub segments: Vec<Segment>,
}

impl Circuit {
    pub fn new(label: impl Into<String>) -> Self {
        Circuit {
            id: Uuid::new_v4(),
            label: label.into(),
            segments: Vec::new(),
        }
    }

    /// Design power carried by the segment at `index`, kVA.
    ///
    /// Loads accumulate along the run: the segment at `index` carries its
    /// own tapped load plus every load tapped before it, so this is the sum
    /// of `pb_power_kva` over segments `0..=index`. An index past the end
    /// returns the full-run total.
    pub fn design_power_at(&self, index: usize) -> f64 {
        self.segments
            .iter()
            .take(index + 1)
            .map(|s| s.pb_power_kva)
            .sum()
    }

    /// Total route length of the feeder, metres.
    pub fn total_length_m(&self) -> f64 {
        self.segments.iter().map(|s| s.length_m).sum()
    }
}

/// One cable segment: construction, installation and the load tapped at its
/// far end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub id: Uuid,

    /// Load tapped at the far end of this segment, kVA
    pub pb_power_kva: f64,

    /// Laid direct in ground or in buried ducts
    pub installation: InstallationMethod,

    pub insulation: Insulation,

    /// Conductor cross-section, mm2
    pub section_mm2: f64,

    pub conductor: Conductor,

    pub voltage_rating: VoltageRating,

    /// Single-core circuit arrangement; ignored for three-core cables
    pub layout: Layout,

    /// Metallic armour present; ignored for single-core cables
    pub armoured: bool,

    pub core: CoreConstruction,

    /// Route length of this segment, m
    pub length_m: f64,

    /// Parallel three-phase circuits sharing the trench
    pub parallel_circuits: u32,

    /// Clearance between adjacent circuits, mm (0 = touching)
    pub spacing_mm: f64,

    /// Burial depth to cable axis, m
    pub depth_m: f64,
}

impl Segment {
    /// Armouring category after construction rules are applied.
    pub fn armouring(&self) -> Armouring {
        Armouring::from_flag(self.armoured)
    }
}

impl Default for Segment {
    fn default() -> Self {
        Segment {
            id: Uuid::new_v4(),
            pb_power_kva: 10_120.0,
            installation: InstallationMethod::DirectBuried,
            insulation: Insulation::Xlpe,
            section_mm2: 400.0,
            conductor: Conductor::Aluminium,
            voltage_rating: VoltageRating::U18_30kV,
            layout: Layout::Trefoil,
            armoured: false,
            core: CoreConstruction::SingleCore,
            length_m: 10_061.0,
            parallel_circuits: 4,
            spacing_mm: 200.0,
            depth_m: 0.8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_creation() {
        let project = Project::new("John Doe", "25-001", "Acme Utility");
        assert_eq!(project.meta.engineer, "John Doe");
        assert_eq!(project.meta.job_id, "25-001");
        assert_eq!(project.meta.client, "Acme Utility");
        assert_eq!(project.meta.version, SCHEMA_VERSION);
        assert_eq!(project.site, SiteConditions::default());
    }

    #[test]
    fn test_project_serialization_roundtrip() {
        let mut project = Project::new("Jane Engineer", "25-042", "Test Client");
        let mut feeder = Circuit::new("Feeder A");
        feeder.segments.push(Segment::default());
        project.add_circuit(feeder);

        let json = serde_json::to_string_pretty(&project).unwrap();
        assert!(json.contains("Jane Engineer"));
        assert!(json.contains("Feeder A"));
        assert!(json.contains("18/30 (36) kV"));

        let roundtrip: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta.engineer, "Jane Engineer");
        assert_eq!(roundtrip.circuits.len(), 1);
        assert_eq!(roundtrip.circuits[0].segments[0].section_mm2, 400.0);
    }

    #[test]
    fn test_add_remove_circuit() {
        let mut project = Project::new("Engineer", "25-001", "Client");
        let id = project.add_circuit(Circuit::new("Feeder A"));
        assert_eq!(project.circuit_count(), 1);
        assert!(project.get_circuit(&id).is_some());

        let removed = project.remove_circuit(&id);
        assert!(removed.is_some());
        assert_eq!(project.circuit_count(), 0);
    }

    #[test]
    fn test_cumulative_design_power() {
        let mut feeder = Circuit::new("Feeder A");
        for kva in [1000.0, 2000.0, 4000.0] {
            feeder.segments.push(Segment {
                pb_power_kva: kva,
                ..Segment::default()
            });
        }

        assert_eq!(feeder.design_power_at(0), 1000.0);
        assert_eq!(feeder.design_power_at(1), 3000.0);
        assert_eq!(feeder.design_power_at(2), 7000.0);
        // Past the end: full-run total
        assert_eq!(feeder.design_power_at(9), 7000.0);
    }

    #[test]
    fn test_segment_defaults() {
        let s = Segment::default();
        assert_eq!(s.section_mm2, 400.0);
        assert_eq!(s.parallel_circuits, 4);
        assert_eq!(s.armouring(), Armouring::Unarmoured);
    }
}
