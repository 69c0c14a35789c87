use anyhow::Result;
use log::info;
use vectorn::Vector;

fn main() -> Result<()> {
    env_logger::init();

    let v1 = Vector::new([1, 2, 3]);
    let v2 = Vector::new([4, 5, 6]);
    info!("demonstrating {:?} and {:?}", v1, v2);

    println!("Vector 1: {}", v1);
    println!("Vector 2: {}", v2);
    println!("Are they equal? {}", v1 == v2);
    println!("Vector 1 magnitude: {}", v1.magnitude());
    println!("Vector 2 direction: {}", v2.direction());
    println!("Vector 1 dimension: {}", v1.dimension());
    println!("Vector 1 < Vector 2: {}", v1 < v2);
    println!("Vector 1 > Vector 2: {}", v1 > v2);
    println!("<1, 2> is truthy: {}", Vector::new([1, 2]).is_nonzero());
    println!("<0, 0> is truthy: {}", Vector::new([0, 0]).is_nonzero());
    println!("Vector 1 as string: {}", v1);
    println!("Vector 2 as repr: {:?}", v2);
    println!("Vector 1 format 2f: {:.2}", v1);
    println!("Vector 1 . Vector 2: {}", v1.dot(&v2));
    println!("Vector 1 x Vector 2: {}", v1.cross(&v2)?);
    println!("<7, 8> as complex: {}", Vector::new([7, 8]).to_complex()?);

    Ok(())
}
