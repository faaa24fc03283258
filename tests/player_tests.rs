use battleships::{
    Direction, GridError, Player, ResultOfAttack, SeaGrid, ShipName, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn small_fleet() -> SeaGrid {
    let mut grid = SeaGrid::new();
    grid.move_ship(0, 0, ShipName::Tug, Direction::LeftRight).unwrap();
    grid.move_ship(4, 5, ShipName::Submarine, Direction::UpDown).unwrap();
    grid
}

fn sink_everything(shooter: &mut Player, target: &mut Player) {
    let tiles: Vec<_> = target.ships().flat_map(|s| s.occupied_tiles()).collect();
    for (r, c) in tiles {
        shooter.shoot(target.grid_mut(), r, c).unwrap();
    }
}

#[test]
fn shots_update_counters_by_outcome() {
    let mut enemy = small_fleet();
    let mut player = Player::undeployed();

    assert_eq!(player.shoot(&mut enemy, 9, 9).unwrap().value(), ResultOfAttack::Miss);
    assert_eq!((player.shots(), player.hits(), player.missed()), (1, 0, 1));

    assert_eq!(player.shoot(&mut enemy, 4, 5).unwrap().value(), ResultOfAttack::Hit);
    assert_eq!((player.shots(), player.hits(), player.missed()), (2, 1, 1));

    assert_eq!(
        player.shoot(&mut enemy, 0, 0).unwrap().value(),
        ResultOfAttack::Destroyed
    );
    assert_eq!((player.shots(), player.hits(), player.missed()), (3, 2, 1));
}

#[test]
fn failed_shots_are_not_charged() {
    let mut enemy = small_fleet();
    let mut player = Player::undeployed();
    player.shoot(&mut enemy, 4, 5).unwrap();

    assert_eq!(
        player.shoot(&mut enemy, 4, 5).unwrap_err(),
        GridError::AlreadyShot { row: 4, col: 5 }
    );
    assert_eq!(
        player.shoot(&mut enemy, 11, 11).unwrap_err(),
        GridError::OutOfBounds { row: 11, col: 11 }
    );
    assert_eq!((player.shots(), player.hits(), player.missed()), (1, 1, 0));
}

#[test]
fn score_rewards_hits_and_charges_shots() {
    let mut enemy = small_fleet();
    let mut player = Player::undeployed();
    player.shoot(&mut enemy, 9, 9).unwrap();
    player.shoot(&mut enemy, 4, 5).unwrap();
    player.shoot(&mut enemy, 0, 0).unwrap();
    // 2 hits * 12 - 3 shots
    assert_eq!(player.score(), 21);
}

#[test]
fn losing_a_ship_costs_points() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut player = Player::new(&mut rng).unwrap();
    let mut opponent = Player::new(&mut rng).unwrap();

    let mut enemy = small_fleet();
    player.shoot(&mut enemy, 0, 0).unwrap();
    assert_eq!(player.score(), 11);

    let (r, c) = player
        .ship(ShipName::Tug)
        .unwrap()
        .occupied_tiles()
        .next()
        .unwrap();
    opponent.shoot(player.grid_mut(), r, c).unwrap();
    assert_eq!(player.grid().ships_killed(), 1);
    assert_eq!(player.score(), 11 - 20);
}

#[test]
fn destroyed_player_scores_zero() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut winner = Player::new(&mut rng).unwrap();
    let mut loser = Player::new(&mut rng).unwrap();

    let mut enemy = small_fleet();
    loser.shoot(&mut enemy, 0, 0).unwrap();
    sink_everything(&mut winner, &mut loser);

    assert!(loser.is_destroyed());
    assert_eq!(loser.score(), 0);
    let hits = TOTAL_SHIP_CELLS as i32;
    assert_eq!(winner.score(), hits * 12 - hits);
}

#[test]
fn new_players_are_randomly_deployed() {
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let player = Player::new(&mut rng).unwrap();
        assert!(player.ready_to_deploy(), "seed {}", seed);
        assert_eq!(player.grid().occupancy().count_ones(), TOTAL_SHIP_CELLS);
        assert_eq!(player.ships().count(), 5);
    }
}

#[test]
fn undeployed_players_start_empty() {
    let player = Player::undeployed();
    assert!(!player.ready_to_deploy());
    assert!(!player.is_destroyed());
    assert!(player.ship(ShipName::None).is_none());
    assert!(player.ships().all(|s| !s.is_deployed()));
}

#[test]
fn randomizing_again_keeps_a_valid_fleet() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut player = Player::new(&mut rng).unwrap();
    for _ in 0..20 {
        player.randomize_deployment(&mut rng).unwrap();
        assert!(player.ready_to_deploy());
        assert_eq!(player.grid().occupancy().count_ones(), TOTAL_SHIP_CELLS);
    }
}
