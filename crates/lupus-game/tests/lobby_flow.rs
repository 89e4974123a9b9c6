//! Integration tests for the lobby: full admission sequences against a
//! small in-memory catalog.

use lupus_catalog::{MemoryCatalog, RoleDefinition, RoleId};
use lupus_game::{Admission, Game, GamePhase, Identity, MASTER_NAME, UNKNOWN_NAME};

// =========================================================================
// Helpers
// =========================================================================

fn catalog(pool: &[&str]) -> MemoryCatalog {
    MemoryCatalog::new(
        vec![
            RoleDefinition::new("werewolf", "Werewolf").visible_to_similars(true),
            RoleDefinition::new("villager", "Villager"),
        ],
        pool.iter().map(|r| RoleId::from(*r)).collect(),
    )
    .unwrap()
}

fn id(s: &str) -> Identity {
    Identity::from(s)
}

/// One step of a lobby script.
#[derive(Clone, Copy, Debug)]
enum Step {
    Player(&'static str),
    Master(&'static str),
}

impl Step {
    fn run(self, game: &mut Game<MemoryCatalog>) -> bool {
        match self {
            Step::Player(who) => game.admit(id(who), Admission::player(who)),
            Step::Master(who) => game.admit(id(who), Admission::AsMaster),
        }
    }
}

/// Every ordering of `steps` (Heap's algorithm).
fn permutations(steps: &[Step]) -> Vec<Vec<Step>> {
    fn heap(k: usize, items: &mut Vec<Step>, out: &mut Vec<Vec<Step>>) {
        if k <= 1 {
            out.push(items.clone());
            return;
        }
        heap(k - 1, items, out);
        for i in 0..k - 1 {
            let swap_with = if k % 2 == 0 { i } else { 0 };
            items.swap(swap_with, k - 1);
            heap(k - 1, items, out);
        }
    }

    let mut items = steps.to_vec();
    let mut out = Vec::new();
    heap(items.len(), &mut items, &mut out);
    out
}

// =========================================================================
// The reference scenario
// =========================================================================

#[test]
fn test_two_werewolves_and_a_master() {
    let (a, b, c, m) = (
        id("192.168.1.130"),
        id("192.168.1.120"),
        id("192.168.1.140"),
        id("192.168.1.110"),
    );
    let wolf = RoleId::from("werewolf");
    let mut game = Game::new(catalog(&["werewolf", "werewolf"]));

    assert!(!game.is_registered(&m));
    assert!(!game.is_registered(&a));
    assert_eq!(game.name_of(&m), UNKNOWN_NAME);
    assert_eq!(game.name_of(&a), UNKNOWN_NAME);
    assert_eq!(game.phase(), GamePhase::WaitingForPlayers);
    assert_eq!(game.role_pool(), &[wolf.clone(), wolf.clone()]);

    assert!(game.admit(a.clone(), Admission::player("a")));
    assert_eq!(game.phase(), GamePhase::WaitingForPlayers);
    assert_eq!(game.lobby_progress_percent(), 33);

    // Same identity again.
    assert!(!game.admit(a.clone(), Admission::player("a")));
    assert_eq!(game.player_count(), 1);

    assert!(game.admit(b.clone(), Admission::player("b")));
    assert!(game.all_players_assigned());
    assert!(!game.master_assigned());
    assert_eq!(game.phase(), GamePhase::WaitingForPlayers);
    assert_eq!(game.all_names(), vec!["a", "b"]);

    // Pool exhausted.
    assert!(!game.admit(c, Admission::player("c")));
    assert_eq!(game.player_count(), 2);

    assert_eq!(game.master(), None);
    assert!(game.admit(m.clone(), Admission::AsMaster));
    assert_eq!(game.phase(), GamePhase::Started);
    assert!(game.has_started());
    assert_eq!(game.master(), Some(&m));

    let names = game.all_names();
    assert_eq!(names.len(), 3);
    assert!(names.contains(&"a"));
    assert!(names.contains(&"b"));
    assert_eq!(names.last(), Some(&MASTER_NAME));

    assert_eq!(game.players_similar_to(&a), Ok(vec![b.clone()]));
    assert_eq!(game.players_similar_to(&b), Ok(vec![a.clone()]));
    assert_eq!(game.role_of(&a), Ok(&wolf));
    assert!(game.is_registered(&m));
    assert!(game.is_registered(&a));
    assert_eq!(game.name_of(&m), MASTER_NAME);
    assert_eq!(game.name_of(&a), "a");
}

// =========================================================================
// Properties over every arrival order
// =========================================================================

#[test]
fn test_start_fires_once_whatever_the_arrival_order() {
    // Three seats, one master, plus a latecomer player and a second master
    // that must both bounce.
    let steps = [
        Step::Player("a"),
        Step::Player("b"),
        Step::Player("c"),
        Step::Master("m"),
        Step::Player("late"),
        Step::Master("m2"),
    ];

    for order in permutations(&steps) {
        let mut game = Game::new(catalog(&["werewolf", "villager", "werewolf"]));
        let mut seated = 0;
        let mut masters = 0;
        let mut started_at = None;

        for (i, step) in order.iter().enumerate() {
            let was_started = game.has_started();
            let accepted = step.run(&mut game);

            if accepted {
                match step {
                    Step::Player(_) => seated += 1,
                    Step::Master(_) => masters += 1,
                }
            }
            if !was_started && game.has_started() {
                assert!(started_at.is_none(), "started twice in {order:?}");
                started_at = Some(i);
            }

            // The master is never seated.
            if let Some(master) = game.master() {
                assert!(game.player(master).is_none(), "master seated in {order:?}");
            }
            assert_eq!(game.has_started(), seated == 3 && masters == 1);
        }

        assert_eq!(seated, 3, "{order:?}");
        assert_eq!(masters, 1, "{order:?}");
        assert!(started_at.is_some(), "never started in {order:?}");
        assert_eq!(game.all_names().len(), 4);
    }
}

#[test]
fn test_reseating_keeps_every_player_record() {
    let mut game = Game::new(catalog(&["werewolf", "villager", "villager", "werewolf"]));
    for who in ["w", "x", "y", "z"] {
        assert!(game.admit(id(who), Admission::player(who)));
    }
    let mut before: Vec<_> = game
        .players()
        .map(|(i, p)| (i.clone(), p.clone()))
        .collect();

    game.admit(id("m"), Admission::AsMaster);

    let mut after: Vec<_> = game
        .players()
        .map(|(i, p)| (i.clone(), p.clone()))
        .collect();
    before.sort_by(|l, r| l.0.cmp(&r.0));
    after.sort_by(|l, r| l.0.cmp(&r.0));
    assert_eq!(before, after);
    assert!(!game.admit(id("v"), Admission::player("v")));
}

#[test]
fn test_similar_players_never_include_self() {
    let mut game = Game::new(catalog(&["werewolf", "werewolf", "werewolf", "villager"]));
    for who in ["a", "b", "c", "d"] {
        game.admit(id(who), Admission::player(who));
    }
    game.admit(id("m"), Admission::AsMaster);

    for who in ["a", "b", "c"] {
        let similar = game.players_similar_to(&id(who)).unwrap();
        assert_eq!(similar.len(), 2);
        assert!(!similar.contains(&id(who)));
    }
    assert!(game.players_similar_to(&id("d")).unwrap().is_empty());
}

#[test]
fn test_names_are_case_insensitively_unique() {
    let mut game = Game::new(catalog(&["villager", "villager", "villager"]));

    assert!(game.admit(id("1"), Admission::player("Ada")));
    assert!(!game.admit(id("2"), Admission::player("ada")));
    assert!(!game.admit(id("3"), Admission::player("ADA")));
    assert!(game.admit(id("4"), Admission::player("Bo")));

    assert_eq!(game.all_names(), vec!["Ada", "Bo"]);
}

#[test]
fn test_finish_closes_the_game() {
    let mut game = Game::new(catalog(&["villager"]));
    game.admit(id("a"), Admission::player("a"));
    game.admit(id("m"), Admission::AsMaster);

    assert!(game.finish());
    assert!(game.has_finished());
    assert!(!game.admit(id("b"), Admission::player("b")));
    // Queries still answer after the end.
    assert_eq!(game.name_of(&id("a")), "a");
}
