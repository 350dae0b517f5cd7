use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::domain::model::allocation::TaskAllocation;
use crate::domain::model::coordinates::Coordinates;
use crate::domain::utils::distance::haversine_distance;
use crate::error::Result;

/// Column order of the allocation report.
pub const HEADERS: [&str; 7] = ["TaskName", "Kind", "CandidateId", "ResourceType", "Quantity", "DistanceKm", "Accepted"];

/// One line of the report: a resource or volunteer allocated to a task.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub task_name: String,
    pub kind: &'static str,
    pub candidate_id: String,
    pub resource_type: String,
    pub quantity: i64,
    pub distance_km: Option<f64>,
    pub accepted: String,
}

impl ReportRow {
    fn to_record(&self) -> [String; 7] {
        [
            self.task_name.clone(),
            self.kind.to_string(),
            self.candidate_id.clone(),
            self.resource_type.clone(),
            self.quantity.to_string(),
            self.distance_km.map(|d| format!("{:.3}", d)).unwrap_or_default(),
            self.accepted.clone(),
        ]
    }
}

/// Flattens allocations into report rows, resources before volunteers within each task.
///
/// Distances are left empty when the disaster location is unknown.
pub fn report_rows(origin: Option<&Coordinates>, task_allocations: &[TaskAllocation]) -> Vec<ReportRow> {
    let distance = |location: &Coordinates| origin.map(|origin| haversine_distance(origin, location));
    let mut rows = Vec::new();

    for task_allocation in task_allocations {
        let task_name = &task_allocation.task.name;

        for allocation in &task_allocation.resource_allocations {
            let resource = &allocation.resource;
            rows.push(ReportRow {
                task_name: task_name.clone(),
                kind: "resource",
                candidate_id: resource.donor_id.to_string(),
                resource_type: resource.resource_type.to_string(),
                quantity: resource.quantity,
                distance_km: distance(&resource.location),
                accepted: allocation.accepted.to_string(),
            });
        }

        for allocation in &task_allocation.volunteer_allocations {
            let volunteer = &allocation.volunteer;
            rows.push(ReportRow {
                task_name: task_name.clone(),
                kind: "volunteer",
                candidate_id: volunteer.id.to_string(),
                resource_type: String::new(),
                quantity: 1,
                distance_km: distance(&volunteer.location),
                accepted: allocation.accepted.to_string(),
            });
        }
    }

    rows
}

/// Writes the allocation report as `;` separated CSV.
pub fn write_task_allocations<W: Write>(writer: W, origin: Option<&Coordinates>, task_allocations: &[TaskAllocation]) -> Result<()> {
    let mut csv_wtr = csv::WriterBuilder::new().delimiter(b';').from_writer(writer);

    csv_wtr.write_record(HEADERS)?;
    for row in report_rows(origin, task_allocations) {
        csv_wtr.write_record(row.to_record())?;
    }
    csv_wtr.flush()?;

    Ok(())
}

pub fn write_report_file(file_path: impl AsRef<Path>, origin: Option<&Coordinates>, task_allocations: &[TaskAllocation]) -> Result<()> {
    let file_path = file_path.as_ref();
    if let Some(parent) = file_path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(file_path)?;
    write_task_allocations(file, origin, task_allocations)?;
    log::info!("Allocation report written to '{}'.", file_path.display());

    Ok(())
}
