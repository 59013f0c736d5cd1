//! Collision detection and merge resolution
//!
//! Two entities collide when their bounding spheres overlap. Every collision is
//! resolved by an inelastic merge: the heavier entity absorbs the lighter one
//! (lower index wins a tie) and the absorbed entity leaves the collection.
//!
//! Pairs are visited in ascending `(i, j)` order, so the same input always
//! produces the same output. A merge can move and grow the survivor into an
//! entity the sweep has already passed, so sweeps repeat until one makes no
//! merge. On return no two entities overlap.

use tracing::trace;

use crate::simulation::states::Entity;

/// Outcome of one collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub merges: usize,
}

/// Merge every overlapping pair and return the survivors in their original order
pub fn resolve_collisions(entities: Vec<Entity>) -> Vec<Entity> {
    resolve_collisions_with_report(entities).0
}

pub fn resolve_collisions_with_report(mut entities: Vec<Entity>) -> (Vec<Entity>, CollisionReport) {
    let n = entities.len();
    let mut report = CollisionReport::default();
    if n < 2 {
        return (entities, report);
    }

    let mut alive = vec![true; n];

    // Every productive sweep removes at least one entity, so this terminates
    loop {
        let merges = sweep(&mut entities, &mut alive);
        if merges == 0 {
            break;
        }
        report.merges += merges;
    }

    if report.merges == 0 {
        return (entities, report);
    }

    let survivors = entities
        .into_iter()
        .zip(alive)
        .filter_map(|(e, live)| live.then_some(e))
        .collect();
    (survivors, report)
}

/// One ascending `(i, j)` pass over the live entities; returns the merge count
fn sweep(entities: &mut [Entity], alive: &mut [bool]) -> usize {
    let n = entities.len();
    let mut merges = 0;

    for i in 0..n {
        if !alive[i] {
            continue;
        }
        for j in (i + 1)..n {
            if !alive[j] || !entities[i].overlaps(&entities[j]) {
                continue;
            }

            let (keep, absorbed) = if entities[j].mass() > entities[i].mass() { (j, i) } else { (i, j) };
            let other = entities[absorbed];
            entities[keep].absorb(&other);
            alive[absorbed] = false;
            merges += 1;
            trace!(keep, absorbed, mass = entities[keep].mass(), "merged entities");

            if absorbed == i {
                break;
            }
        }
    }

    merges
}

/// Every overlapping pair `(i, j)` with `i < j`, in sweep order, without resolving
pub fn detect_collisions(entities: &[Entity]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, a) in entities.iter().enumerate() {
        for (j, b) in entities.iter().enumerate().skip(i + 1) {
            if a.overlaps(b) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}
