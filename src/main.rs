use crossmat::{DumpConfig, SparseMatrix};
use tracing_subscriber::EnvFilter;

fn main() -> crossmat::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("crossmat {}: orthogonal linked sparse matrices", crossmat::VERSION);

    // Create a simple example matrix
    //    [1 2 0]
    //    [0 3 0]
    //    [4 0 5]
    let a = SparseMatrix::from_triplets(
        3,
        3,
        vec![(0, 0, 1), (0, 1, 2), (1, 1, 3), (2, 0, 4), (2, 2, 5)],
    )?;

    let b = SparseMatrix::from_triplets(3, 3, vec![(0, 0, 7), (0, 2, 8), (1, 0, 9), (2, 1, 10)])?;

    // Display the matrices
    println!("\nMatrix A:");
    a.print();
    println!("\nMatrix B:");
    b.print();

    println!("\nA + B:");
    a.add(&b)?.print();

    println!("\nA - B:");
    a.subtract(&b)?.print();

    println!("\nA × B:");
    a.multiply(&b)?.print();

    println!("\nA × 3:");
    a.scale(3).print();

    println!("\nA transposed:");
    a.transpose().print();

    let wide = SparseMatrix::from_triplets(2, 6, vec![(0, 5, 1), (1, 0, 2)])?;
    println!("\nWide matrix (truncated dump):");
    print!("{}", wide.dump_with(&DumpConfig::truncated(2, 4).with_separator("\t")));

    println!("\n{:?}", a);
    Ok(())
}
