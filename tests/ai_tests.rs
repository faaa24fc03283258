use battleships::{
    AiPlayer, AiState, AttackResult, EasyAi, EnemyGrid, Player, ResultOfAttack, SeaGrid,
    ShootingStrategy, TileView, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn easy_ai_finds_the_last_open_tile() {
    let mut grid = SeaGrid::new();
    for r in 0..grid.height() {
        for c in 0..grid.width() {
            if (r, c) != (7, 3) {
                grid.hit_tile(r, c).unwrap();
            }
        }
    }
    let mut rng = SmallRng::seed_from_u64(1);
    let mut ai = EasyAi::new();
    assert_eq!(ai.generate_coords(&mut rng, &grid.enemy_view()), Some((7, 3)));

    grid.hit_tile(7, 3).unwrap();
    assert_eq!(ai.generate_coords(&mut rng, &grid.enemy_view()), None);
}

#[test]
fn easy_ai_only_targets_open_sea() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut target = Player::new(&mut rng).unwrap();
    let mut ai = EasyAi::new();
    let mut shooter = Player::undeployed();

    for _ in 0..60 {
        let (r, c) = ai
            .generate_coords(&mut rng, &target.grid().enemy_view())
            .unwrap();
        assert_eq!(target.grid().enemy_view().view(r, c), Some(TileView::Sea));
        let result = shooter.shoot(target.grid_mut(), r, c).unwrap();
        ai.process_shot(r, c, &result);
        assert_eq!(ai.state(), AiState::Searching);
    }
    assert_eq!(shooter.shots(), 60);
}

#[test]
fn ai_player_clears_the_whole_grid_without_errors() {
    let mut rng = SmallRng::seed_from_u64(123);
    let mut ai = AiPlayer::easy(&mut rng).unwrap();
    let mut target = Player::new(&mut rng).unwrap();

    let cells = target.grid().width() * target.grid().height();
    for _ in 0..cells {
        let result = ai.attack(&mut rng, target.grid_mut()).unwrap();
        assert!(result.is_some());
    }
    assert!(ai.attack(&mut rng, target.grid_mut()).unwrap().is_none());

    assert!(target.is_destroyed());
    let p = ai.player();
    assert_eq!(p.shots() as usize, cells);
    assert_eq!(p.hits() as usize, TOTAL_SHIP_CELLS);
    assert_eq!(p.missed() as usize, cells - TOTAL_SHIP_CELLS);
}

/// Row-major sweep; stands in for a harder difficulty tier.
#[derive(Default)]
struct SweepAi {
    seen: Vec<(usize, usize, ResultOfAttack)>,
}

impl ShootingStrategy for SweepAi {
    fn generate_coords(&mut self, _rng: &mut SmallRng, enemy: &EnemyGrid<'_>) -> Option<(usize, usize)> {
        (0..enemy.height())
            .flat_map(|r| (0..enemy.width()).map(move |c| (r, c)))
            .find(|&(r, c)| enemy.view(r, c) == Some(TileView::Sea))
    }

    fn process_shot(&mut self, row: usize, col: usize, result: &AttackResult) {
        self.seen.push((row, col, result.value()));
    }
}

#[test]
fn other_strategies_plug_into_the_same_player() {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut ai = AiPlayer::new(Player::undeployed(), SweepAi::default());
    let mut target = SeaGrid::new();

    ai.attack(&mut rng, &mut target).unwrap();
    ai.attack(&mut rng, &mut target).unwrap();

    assert_eq!(
        ai.strategy().seen,
        vec![(0, 0, ResultOfAttack::Miss), (0, 1, ResultOfAttack::Miss)]
    );
    assert_eq!(ai.player().shots(), 2);
}
