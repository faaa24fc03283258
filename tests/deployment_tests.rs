use battleships::{DeploymentSession, Direction, GridError, Player, ShipName};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn session_starts_with_tug_up_down() {
    let session = DeploymentSession::new();
    assert_eq!(session.selected(), ShipName::Tug);
    assert_eq!(session.direction(), Direction::UpDown);
}

#[test]
fn selecting_none_keeps_the_current_ship() {
    let mut session = DeploymentSession::new();
    session.select_ship(ShipName::Destroyer);
    session.select_ship(ShipName::None);
    assert_eq!(session.selected(), ShipName::Destroyer);
}

#[test]
fn deploy_moves_the_selected_ship() {
    let mut session = DeploymentSession::new();
    let mut player = Player::undeployed();
    session.select_ship(ShipName::Battleship);
    session.set_direction(Direction::LeftRight);
    session.deploy_at(&mut player, 3, 3).unwrap();

    let ship = player.ship(ShipName::Battleship).unwrap();
    assert_eq!((ship.row(), ship.col()), (3, 3));
    assert_eq!(ship.direction(), Direction::LeftRight);
    assert!(ship.occupies(3, 6));
}

#[test]
fn failed_deploy_leaves_the_board_alone() {
    let mut session = DeploymentSession::new();
    let mut player = Player::undeployed();
    session.select_ship(ShipName::AircraftCarrier);
    session.set_direction(Direction::LeftRight);
    session.deploy_at(&mut player, 0, 0).unwrap();

    session.select_ship(ShipName::Battleship);
    session.set_direction(Direction::UpDown);
    assert_eq!(
        session.deploy_at(&mut player, 0, 2),
        Err(GridError::Overlap {
            name: ShipName::AircraftCarrier
        })
    );
    assert!(!player.ship(ShipName::Battleship).unwrap().is_deployed());
    assert_eq!(player.grid().occupancy().count_ones(), 5);
}

#[test]
fn rotating_keeps_the_clicked_tile_covered() {
    let mut session = DeploymentSession::new();
    let mut player = Player::undeployed();
    player
        .grid_mut()
        .move_ship(2, 2, ShipName::Battleship, Direction::LeftRight)
        .unwrap();

    assert_eq!(session.rotate_ship_at(&mut player, 2, 4), Ok(true));
    let ship = player.ship(ShipName::Battleship).unwrap();
    assert_eq!((ship.row(), ship.col()), (0, 4));
    assert_eq!(ship.direction(), Direction::UpDown);
    let tiles: Vec<_> = ship.occupied_tiles().collect();
    assert_eq!(tiles, vec![(0, 4), (1, 4), (2, 4), (3, 4)]);
    assert_eq!(session.selected(), ShipName::Battleship);
    assert_eq!(session.direction(), Direction::UpDown);
}

#[test]
fn rotating_up_down_turns_left_right() {
    let mut session = DeploymentSession::new();
    let mut player = Player::undeployed();
    player
        .grid_mut()
        .move_ship(5, 5, ShipName::Destroyer, Direction::UpDown)
        .unwrap();

    assert_eq!(session.rotate_ship_at(&mut player, 6, 5), Ok(true));
    let tiles: Vec<_> = player
        .ship(ShipName::Destroyer)
        .unwrap()
        .occupied_tiles()
        .collect();
    assert_eq!(tiles, vec![(6, 4), (6, 5), (6, 6)]);
    assert_eq!(session.direction(), Direction::LeftRight);
}

#[test]
fn rotation_that_does_not_fit_is_undone() {
    let mut session = DeploymentSession::new();
    let mut player = Player::undeployed();
    player
        .grid_mut()
        .move_ship(0, 0, ShipName::Battleship, Direction::LeftRight)
        .unwrap();
    session.set_direction(Direction::LeftRight);
    let before = player.grid().clone();

    assert!(matches!(
        session.rotate_ship_at(&mut player, 0, 3),
        Err(GridError::OutOfBounds { .. })
    ));
    assert_eq!(player.grid(), &before);
    assert_eq!(session.direction(), Direction::LeftRight);

    // Blocked by another ship.
    player
        .grid_mut()
        .move_ship(2, 0, ShipName::Tug, Direction::UpDown)
        .unwrap();
    let before = player.grid().clone();
    assert_eq!(
        session.rotate_ship_at(&mut player, 0, 0),
        Err(GridError::Overlap { name: ShipName::Tug })
    );
    assert_eq!(player.grid(), &before);
}

#[test]
fn rotating_open_sea_does_nothing() {
    let mut session = DeploymentSession::new();
    let mut player = Player::undeployed();
    assert_eq!(session.rotate_ship_at(&mut player, 4, 4), Ok(false));
}

#[test]
fn randomize_makes_the_player_ready() {
    let session = DeploymentSession::new();
    let mut player = Player::undeployed();
    let mut rng = SmallRng::seed_from_u64(3);
    assert!(!session.ready(&player));
    session.randomize(&mut player, &mut rng).unwrap();
    assert!(session.ready(&player));
}
