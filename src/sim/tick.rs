//! Fixed timestep match loop
//!
//! [`Match`] owns the state, the arena and the RNG. The host calls
//! [`Match::handle_input`] then [`Match::update`] once per frame, in that
//! order, and reads [`Match::snapshot`] to draw.
//!
//! The event queue only holds the current frame. Hosts that want sound or
//! effects hooks drain it after `update`; hosts that don't can ignore it.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::{count_enemy_contacts, resolve_enemy_bullets, resolve_player_bullets};
use super::entity::{Enemy, Entity, Projectile};
use super::geometry::Arena;
use super::input::{FrameInput, HeldKeys, InputEvent, LoopSignal};
use super::snapshot::Snapshot;
use super::state::{MatchEvent, MatchPhase, MatchState};
use crate::consts::*;

/// A single-player match: state machine plus everything needed to advance it
#[derive(Debug, Clone)]
pub struct Match {
    arena: Arena,
    seed: u64,
    rng: Pcg32,
    state: MatchState,
    /// Events for the current frame
    events: Vec<MatchEvent>,
    /// Set by `handle_input` so the following `update` keeps its events
    frame_open: bool,
}

impl Match {
    /// Start a match in the given arena with a seeded RNG
    pub fn new(arena: Arena, seed: u64) -> Self {
        log::info!(
            "Match starting: arena {}x{}, seed {}",
            arena.width,
            arena.height,
            seed
        );
        Self {
            arena,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            state: MatchState::new(&arena),
            events: Vec::new(),
            frame_open: false,
        }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn phase(&self) -> MatchPhase {
        self.state.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.state.phase == MatchPhase::GameOver
    }

    /// Replace the state with a fresh one. The RNG stream continues.
    pub fn reset(&mut self) {
        log::info!(
            "Restarting match (previous score {}, waves completed {})",
            self.state.score,
            self.state.waves_completed()
        );
        self.state = MatchState::new(&self.arena);
        self.events.push(MatchEvent::Restarted);
    }

    /// Snapshot the match for rendering. Pure; calling it twice in a row
    /// returns equal snapshots.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, &self.arena)
    }

    /// Take the events recorded during the current frame
    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }

    /// Record held movement keys and consume discrete events in order.
    ///
    /// Quit stops processing and tells the host to leave its loop. Fire only
    /// works while playing; Restart only after game over.
    pub fn handle_input(&mut self, events: &[InputEvent], held: HeldKeys) -> LoopSignal {
        self.begin_frame();
        self.frame_open = true;
        self.state.player.controls = held;

        for event in events {
            match event {
                InputEvent::Quit => {
                    log::info!("Quit requested");
                    return LoopSignal::Quit;
                }
                InputEvent::Fire => {
                    if self.state.phase == MatchPhase::Playing {
                        let bullet = Projectile::player_shot(self.state.player.muzzle());
                        self.state.player_bullets.push(bullet);
                        self.events.push(MatchEvent::PlayerFired);
                    }
                }
                InputEvent::Restart => {
                    if self.state.phase == MatchPhase::GameOver {
                        self.reset();
                        // Keep the keys the host reported this frame
                        self.state.player.controls = held;
                    }
                }
            }
        }

        LoopSignal::Continue
    }

    /// Convenience wrapper: input then update for one frame
    pub fn step(&mut self, input: &FrameInput) -> LoopSignal {
        let signal = self.handle_input(&input.events, input.held);
        if signal == LoopSignal::Continue {
            self.update();
        }
        signal
    }

    /// Advance the simulation by one tick. Does nothing after game over.
    pub fn update(&mut self) {
        // An update without input of its own starts a new frame
        if !std::mem::take(&mut self.frame_open) {
            self.begin_frame();
        }
        if self.state.phase == MatchPhase::GameOver {
            return;
        }
        self.state.ticks += 1;

        self.advance_entities();
        self.schedule_spawn();
        self.check_wave_complete();
        self.enemy_fire();
        self.resolve_collisions();
        self.check_game_over();
    }

    /// Drop events nobody drained last frame
    fn begin_frame(&mut self) {
        self.events.clear();
    }

    /// Move everything one tick and drop what left the arena
    fn advance_entities(&mut self) {
        let arena = self.arena;
        let state = &mut self.state;

        state.player.advance(&arena);

        for bullet in state.player_bullets.iter_mut().chain(state.enemy_bullets.iter_mut()) {
            bullet.advance(&arena);
            if bullet.is_expired(&arena) {
                bullet.alive = false;
            }
        }

        for enemy in &mut state.enemies {
            enemy.advance(&arena);
            if enemy.is_expired(&arena) {
                enemy.alive = false;
                // Escapes never score
                self.events.push(MatchEvent::EnemyEscaped);
                log::trace!("Enemy escaped at x={}", enemy.rect.left());
            }
        }

        state.compact();
    }

    fn schedule_spawn(&mut self) {
        let wave = &mut self.state.wave;
        if wave.enemies_spawned < wave.max_enemies && wave.spawn_cooldown <= 0 {
            let enemy = Enemy::spawn(&self.arena, &mut self.rng);
            log::debug!(
                "Wave {}: spawned enemy {}/{} at ({}, {})",
                wave.number,
                wave.enemies_spawned + 1,
                wave.max_enemies,
                enemy.rect.left(),
                enemy.rect.top()
            );
            self.state.enemies.push(enemy);
            wave.enemies_spawned += 1;
            wave.spawn_cooldown = wave.spawn_interval;
            self.events.push(MatchEvent::EnemySpawned);
        } else {
            wave.spawn_cooldown -= 1;
        }
    }

    fn check_wave_complete(&mut self) {
        if self.state.wave.all_spawned() && self.state.live_enemies() == 0 {
            self.state.wave.advance();
            let wave = &self.state.wave;
            log::info!(
                "Wave {} cleared! Next: wave {} ({} enemies, spawn every {} ticks)",
                wave.number - 1,
                wave.number,
                wave.max_enemies,
                wave.spawn_interval
            );
            self.events.push(MatchEvent::WaveCleared {
                next_wave: wave.number,
            });
        }
    }

    fn enemy_fire(&mut self) {
        for enemy in &mut self.state.enemies {
            if enemy.tick_shoot_timer(&mut self.rng) {
                self.state.enemy_bullets.push(Projectile::enemy_shot(enemy.muzzle()));
                self.events.push(MatchEvent::EnemyFired);
            }
        }
    }

    fn resolve_collisions(&mut self) {
        let state = &mut self.state;

        // Player bullets vs enemies
        let hits = resolve_player_bullets(&mut state.enemies, &mut state.player_bullets);
        for _ in &hits.kills {
            state.score += KILL_SCORE;
            state.wave.enemies_killed += 1;
            self.events.push(MatchEvent::EnemyKilled { score: state.score });
        }
        if !hits.kills.is_empty() {
            log::debug!(
                "{} hit(s), {} kill(s); score {}",
                hits.hits,
                hits.kills.len(),
                state.score
            );
        }

        // Enemy bullets vs player
        let bullet_hits = resolve_enemy_bullets(&state.player, &mut state.enemy_bullets);
        let mut damage = bullet_hits as f32 * ENEMY_BULLET_DAMAGE;

        // Body contact: chip damage every tick the overlap lasts
        let contacts = count_enemy_contacts(&state.player, &state.enemies);
        damage += contacts as f32 * CONTACT_DAMAGE_PER_TICK;

        if damage > 0.0 {
            state.player.apply_damage(damage);
            log::trace!(
                "Player took {} damage ({} bullets, {} contacts), health {}",
                damage,
                bullet_hits,
                contacts,
                state.player.health
            );
            self.events.push(MatchEvent::PlayerHit {
                damage,
                health: state.player.health,
            });
        }

        state.compact();
    }

    fn check_game_over(&mut self) {
        if self.state.player.is_dead() {
            self.state.phase = MatchPhase::GameOver;
            let waves_completed = self.state.waves_completed();
            log::info!(
                "Game over: score {}, waves completed {}, after {} ticks",
                self.state.score,
                waves_completed,
                self.state.ticks
            );
            self.events.push(MatchEvent::GameOver {
                score: self.state.score,
                waves_completed,
            });
        }
    }
}
