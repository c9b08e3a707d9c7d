fn main() {
    divan::main();
}

#[divan::bench]
fn games(bencher: divan::Bencher) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../testfiles/")
        .join("games.log");
    let data = std::fs::read(path).unwrap();

    bencher.bench(|| analysis::games::parse(divan::black_box(&data[..])));
}

#[divan::bench]
fn ranking(bencher: divan::Bencher) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../testfiles/")
        .join("games.log");
    let games = analysis::games::parse(&std::fs::read(path).unwrap()[..]).unwrap();

    bencher.bench(|| analysis::ranking::rank(divan::black_box(&games)));
}
