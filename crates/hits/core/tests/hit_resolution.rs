use hits_core::{
    GameId, GameSeedState, HitKind, HitResolver, PcgRng, ResolverConfig, RngOracle, Seed,
    SeedAccumulator, Sha256Rng, current_seed,
};

fn assert_band(kind: HitKind, value: u64) {
    let (lo, hi) = kind.band().expect("banded kind");
    assert!(
        (lo..=hi).contains(&value),
        "{kind} = {value} outside [{lo}, {hi}]"
    );
}

fn run_with<R: RngOracle>(rng: &R) {
    let accumulator = SeedAccumulator::new(rng);
    let resolver = HitResolver::new(rng, ResolverConfig::default());
    let mut seeds = GameSeedState::new();

    // ================================================================
    // Seed map keeps one entry per game
    // ================================================================
    accumulator.update_seed(&mut seeds, GameId(2), 35);
    accumulator.update_seed(&mut seeds, GameId(16), 902);
    let seed2 = current_seed(&seeds, GameId(2));
    let seed16 = current_seed(&seeds, GameId(16));
    assert_ne!(seed2, Seed::ZERO);
    assert_ne!(seed16, Seed::ZERO);
    assert_ne!(seed2, seed16);

    // ================================================================
    // Low tier
    // ================================================================
    accumulator.update_seed(&mut seeds, GameId(16), 902);
    let low = resolver
        .assign_low_values(&seeds, GameId(16), 799)
        .expect("low values");
    assert_band(HitKind::LowPunch, low.punch);
    assert_band(HitKind::LowKick, low.kick);
    assert_band(HitKind::LowThunder, low.thunder);

    // ================================================================
    // Hard tier
    // ================================================================
    accumulator.update_seed(&mut seeds, GameId(20), 890);
    let hard = resolver
        .assign_high_values(&seeds, GameId(20), 799)
        .expect("high values");
    assert_band(HitKind::HardPunch, hard.punch);
    assert_band(HitKind::HardKick, hard.kick);
    assert_band(HitKind::HardThunder, hard.thunder);

    // ================================================================
    // Slash
    // ================================================================
    accumulator.update_seed(&mut seeds, GameId(30), 1290);
    let slash = resolver
        .assign_slash_value(&seeds, GameId(30), 3298)
        .expect("slash value");
    let again = resolver
        .assign_slash_value(&seeds, GameId(30), 3298)
        .expect("slash value");
    assert_eq!(slash, again);

    // ================================================================
    // All seven values for the betting module
    // ================================================================
    accumulator.update_seed(&mut seeds, GameId(95), 4390);
    let values = resolver
        .finalize_hit_type_values(&seeds, GameId(95), 213)
        .expect("finalized values");
    let (lp, lk, lt, hp, hk, ht, _slash) = values.as_tuple();
    assert_band(HitKind::LowPunch, lp);
    assert_band(HitKind::LowKick, lk);
    assert_band(HitKind::LowThunder, lt);
    assert_band(HitKind::HardPunch, hp);
    assert_band(HitKind::HardKick, hk);
    assert_band(HitKind::HardThunder, ht);

    assert_eq!(seeds.len(), 5);
}

#[test]
fn source_scenarios_hold_for_pcg() {
    run_with(&PcgRng);
}

#[test]
fn source_scenarios_hold_for_sha256() {
    run_with(&Sha256Rng);
}

#[test]
fn replaying_the_same_inputs_reproduces_every_value() {
    let inputs = [(GameId(1), 88u64), (GameId(2), 35), (GameId(1), 899), (GameId(95), 4390)];

    let replay = || {
        let rng = PcgRng;
        let accumulator = SeedAccumulator::new(&rng);
        let resolver = HitResolver::new(&rng, ResolverConfig::default());
        let mut seeds = GameSeedState::new();
        inputs
            .iter()
            .map(|&(game, input)| {
                accumulator.update_seed(&mut seeds, game, input);
                resolver
                    .finalize_hit_type_values(&seeds, game, input)
                    .expect("resolved")
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(replay(), replay());
}

#[test]
fn oracles_disagree_on_values_but_agree_on_bands() {
    let config = ResolverConfig::default();
    let pcg = HitResolver::new(&PcgRng, config.clone());
    let sha = HitResolver::new(&Sha256Rng, config);

    let a = pcg.resolve_seed(Seed(0x1234), 9).expect("pcg");
    let b = sha.resolve_seed(Seed(0x1234), 9).expect("sha");
    assert_ne!(a, b);
    for kind in HitKind::BANDED {
        assert_eq!(HitKind::classify(a.value(kind)), Some(kind));
        assert_eq!(HitKind::classify(b.value(kind)), Some(kind));
    }
}

#[test]
fn resolver_works_through_a_trait_object() {
    let rng: &dyn RngOracle = &Sha256Rng;
    let accumulator = SeedAccumulator::new(rng);
    let resolver = HitResolver::new(rng, ResolverConfig::default());
    let mut seeds = GameSeedState::new();

    let seed = accumulator.update_seed(&mut seeds, GameId(7), 7);
    let via_store = resolver
        .finalize_hit_type_values(&seeds, GameId(7), 1)
        .expect("resolved");
    assert_eq!(via_store, resolver.resolve_seed(seed, 1).expect("resolved"));
}
