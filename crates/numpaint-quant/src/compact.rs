//! Palette compaction
//!
//! Turns a raw clustering into the worksheet palette: clusters that no
//! pixel uses are dropped, the survivors get stable 1-based ids in
//! ascending cluster-index order, and the assignment array is remapped
//! to the compacted 0-based indices.

use crate::error::{QuantError, QuantResult};
use crate::kmeans::Clustering;
use numpaint_core::{PaletteColor, alloc};

/// A compacted palette plus the remapped per-pixel assignments.
#[derive(Debug, Clone)]
pub struct CompactPalette {
    /// Palette entries with contiguous ids `1..=len`
    pub palette: Vec<PaletteColor>,
    /// Per-pixel 0-based palette index (`palette[index].id == index + 1`)
    pub assignments: Vec<u32>,
}

/// Drop unused clusters and remap assignments onto the compact palette.
///
/// # Errors
///
/// Returns [`QuantError::AssignmentOutOfRange`] if an assignment does not
/// index into the clustering's centroids, and
/// [`numpaint_core::Error::AllocationFailed`] if the remap table cannot
/// be allocated.
pub fn compact_palette(clustering: Clustering) -> QuantResult<CompactPalette> {
    let clusters = clustering.centroids.len();

    // Which clusters actually appear, in ascending index order.
    let mut used = alloc::filled_vec(false, clusters)?;
    for &assignment in &clustering.assignments {
        let index = assignment as usize;
        if index >= clusters {
            return Err(QuantError::AssignmentOutOfRange {
                assignment,
                clusters,
            });
        }
        used[index] = true;
    }

    let mut remap = alloc::filled_vec(u32::MAX, clusters)?;
    let mut palette = Vec::new();
    for (cluster, &in_use) in used.iter().enumerate() {
        if !in_use {
            continue;
        }
        let compact_index = palette.len() as u32;
        remap[cluster] = compact_index;
        palette.push(PaletteColor::new(
            compact_index + 1,
            clustering.centroids[cluster],
        ));
    }

    let mut assignments = clustering.assignments;
    for assignment in &mut assignments {
        *assignment = remap[*assignment as usize];
    }

    Ok(CompactPalette {
        palette,
        assignments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use numpaint_core::{Rgb, TextColor};

    #[test]
    fn test_unused_clusters_are_dropped() {
        let clustering = Clustering {
            centroids: vec![
                Rgb::new(255, 0, 0),
                Rgb::new(0, 255, 0),
                Rgb::new(0, 0, 255),
                Rgb::new(9, 9, 9),
            ],
            // Clusters 1 and 3 never appear.
            assignments: vec![0, 2, 2, 0, 0],
        };

        let compact = compact_palette(clustering).unwrap();

        assert_eq!(compact.palette.len(), 2);
        assert_eq!(compact.palette[0].id, 1);
        assert_eq!(compact.palette[0].rgb, Rgb::new(255, 0, 0));
        assert_eq!(compact.palette[1].id, 2);
        assert_eq!(compact.palette[1].rgb, Rgb::new(0, 0, 255));
        assert_eq!(compact.assignments, vec![0, 1, 1, 0, 0]);
    }

    #[test]
    fn test_display_metadata_is_derived() {
        let clustering = Clustering {
            centroids: vec![Rgb::new(250, 250, 20), Rgb::new(10, 10, 40)],
            assignments: vec![0, 1],
        };

        let compact = compact_palette(clustering).unwrap();

        assert_eq!(compact.palette[0].hex, "#fafa14");
        assert_eq!(compact.palette[0].text_color, TextColor::Black);
        assert_eq!(compact.palette[1].hex, "#0a0a28");
        assert_eq!(compact.palette[1].text_color, TextColor::White);
        assert!(compact.palette.iter().all(|entry| entry.count == 0));
    }

    #[test]
    fn test_ids_are_contiguous_for_sparse_use() {
        let centroids: Vec<Rgb> = (0..8).map(|i| Rgb::new(i * 30, 0, 0)).collect();
        let clustering = Clustering {
            centroids,
            assignments: vec![7, 3, 5, 3, 7],
        };

        let compact = compact_palette(clustering).unwrap();

        let ids: Vec<u32> = compact.palette.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        // Ascending cluster-index order: 3, 5, 7.
        assert_eq!(compact.palette[0].rgb, Rgb::new(90, 0, 0));
        assert_eq!(compact.palette[1].rgb, Rgb::new(150, 0, 0));
        assert_eq!(compact.palette[2].rgb, Rgb::new(210, 0, 0));
        assert_eq!(compact.assignments, vec![2, 0, 1, 0, 2]);
    }

    #[test]
    fn test_out_of_range_assignment_is_rejected() {
        let clustering = Clustering {
            centroids: vec![Rgb::new(0, 0, 0)],
            assignments: vec![0, 1],
        };
        assert!(matches!(
            compact_palette(clustering),
            Err(QuantError::AssignmentOutOfRange {
                assignment: 1,
                clusters: 1
            })
        ));
    }
}
