//! Collision passes between entity collections
//!
//! Each pass first gathers every overlapping pair against the state at the
//! start of the pass, then applies the results. Removal only marks entities
//! dead; the caller compacts the collections afterwards.

use super::entity::{Enemy, Entity, Player, Projectile};
use crate::consts::*;

/// Result of resolving player bullets against enemies
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulletHits {
    /// Number of (enemy, bullet) overlaps applied
    pub hits: usize,
    /// Indices of enemies killed by this pass
    pub kills: Vec<usize>,
}

/// All (lhs index, rhs index) pairs whose rectangles overlap
pub fn overlapping_pairs<A: Entity, B: Entity>(lhs: &[A], rhs: &[B]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, a) in lhs.iter().enumerate() {
        let a_bounds = a.bounds();
        for (j, b) in rhs.iter().enumerate() {
            if a_bounds.overlaps(&b.bounds()) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Player bullets vs enemies.
///
/// Every overlapping pair consumes the bullet and deals fixed damage, so one
/// bullet spanning two enemies hurts both and an enemy under two bullets
/// takes both hits. Each enemy is reported as killed at most once.
pub fn resolve_player_bullets(enemies: &mut [Enemy], bullets: &mut [Projectile]) -> BulletHits {
    let live_enemies: Vec<bool> = enemies.iter().map(|e| e.alive).collect();
    let live_bullets: Vec<bool> = bullets.iter().map(|b| b.alive).collect();

    let pairs: Vec<(usize, usize)> = overlapping_pairs(enemies, bullets)
        .into_iter()
        .filter(|&(ei, bi)| live_enemies[ei] && live_bullets[bi])
        .collect();

    let mut result = BulletHits::default();
    for (ei, bi) in pairs {
        bullets[bi].alive = false;
        result.hits += 1;
        if enemies[ei].apply_damage(PLAYER_BULLET_DAMAGE) {
            result.kills.push(ei);
        }
    }
    result
}

/// Enemy bullets vs the player. Overlapping bullets are consumed; returns how many hit.
pub fn resolve_enemy_bullets(player: &Player, bullets: &mut [Projectile]) -> usize {
    let target = player.bounds();
    let mut hits = 0;
    for bullet in bullets.iter_mut().filter(|b| b.alive) {
        if target.overlaps(&bullet.bounds()) {
            bullet.alive = false;
            hits += 1;
        }
    }
    hits
}

/// Enemies touching the player. Nothing is removed; returns the contact count.
pub fn count_enemy_contacts(player: &Player, enemies: &[Enemy]) -> usize {
    let target = player.bounds();
    enemies
        .iter()
        .filter(|e| e.alive && target.overlaps(&e.bounds()))
        .count()
}
