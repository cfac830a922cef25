use rand::rngs::StdRng;
use rand::SeedableRng;

use swact_rs::lit::Lit;
use swact_rs::network::Aig;
use swact_rs::persist::{load_or_template, write_template};
use swact_rs::simulate::compute_switching_with_rng;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    // Full adder: sum and carry of three inputs, And/Not only.
    let mut aig = Aig::new();
    let a = aig.add_input();
    let b = aig.add_input();
    let cin = aig.add_input();

    // xor(x, y) = !(!(x & !y) & !(!x & y))
    let xor = |aig: &mut Aig, x: Lit, y: Lit| {
        let t0 = aig.add_and(x, !y);
        let t1 = aig.add_and(!x, y);
        !aig.add_and(!t0, !t1)
    };
    let ab = xor(&mut aig, a, b);
    let sum = xor(&mut aig, ab, cin);
    let t2 = aig.add_and(a, b);
    let t3 = aig.add_and(ab, cin);
    let carry = !aig.add_and(!t2, !t3);
    aig.add_output(sum);
    aig.add_output(carry);

    let mut rng = StdRng::seed_from_u64(2025);
    let switching = compute_switching_with_rng(&aig, 4096, &mut rng);

    println!("switching activity ({} patterns):", 4096);
    for &ci in aig.cis() {
        println!("  input n{}: {:.4}", ci, switching.of_node(ci));
    }
    for id in aig.dfs_order() {
        println!("  node  n{}: {:.4}", id, switching.of_node(id));
    }

    let path = write_template(&aig, "full_adder")?;
    println!("template: {}", path.display());

    // Reload the template we just wrote (all placeholders).
    let reloaded = load_or_template(&aig, Some(&path), "full_adder")?;
    println!("reloaded {} entries", reloaded.map(|v| v.len()).unwrap_or(0));

    Ok(())
}
