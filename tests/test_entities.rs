use arcade_shooter::entities::*;

#[test]
fn bodies_advance_by_exactly_their_velocity() {
    let mut bullet = Bullet { x: 100.0, y: 100.0, vx: 1.5, vy: -2.0 };
    bullet.advance();
    assert_eq!(bullet.position(), Position { x: 101.5, y: 98.0 });

    let mut enemy = Enemy { x: 40.0, y: 40.0, vx: 0.0, vy: 0.5, health: 1 };
    enemy.advance();
    assert_eq!(enemy.position(), Position { x: 40.0, y: 40.5 });
}

#[test]
fn zero_velocity_body_stays_put() {
    let mut bullet = Bullet { x: 12.0, y: 34.0, vx: 0.0, vy: 0.0 };
    for _ in 0..10 {
        bullet.advance();
    }
    assert_eq!(bullet.position(), Position { x: 12.0, y: 34.0 });
}

#[test]
fn single_health_enemy_dies_on_first_hit() {
    let mut enemy = Enemy { x: 0.0, y: 0.0, vx: 0.0, vy: 0.5, health: 1 };
    assert!(enemy.take_hit());
    assert_eq!(enemy.health, 0);
}

#[test]
fn tougher_enemy_survives_until_health_runs_out() {
    let mut enemy = Enemy { x: 0.0, y: 0.0, vx: 0.0, vy: 0.5, health: 2 };
    assert!(!enemy.take_hit());
    assert!(enemy.take_hit());
}

#[test]
fn frame_report_defaults_to_nothing_happened() {
    assert_eq!(FrameReport::default(), FrameReport { kills: 0, escaped: 0 });
}
