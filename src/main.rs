use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use single_linked_list::{LinkedList, ListError, Position};

/// Walks a singly linked list through its operations and prints each step.
#[derive(Parser, Debug)]
#[command(about)]
struct CmdOptions {
    /// Number of integers to push to the front
    #[arg(short, long, default_value_t = 11)]
    count: u32,
    /// Number of random values to insert at random positions
    #[arg(long, default_value_t = 0)]
    shuffle: usize,
    /// Seed for the random run
    #[arg(long)]
    seed: Option<u64>,
}

/// Position of the element at `index`, or the sentinel for `None`.
fn nth_anchor<T>(list: &LinkedList<T>, index: Option<usize>) -> Result<Position, ListError> {
    let mut pos = list.before_begin();
    if let Some(index) = index {
        for _ in 0..=index {
            pos = list.advance(pos)?;
        }
    }
    Ok(pos)
}

fn main() -> Result<(), ListError> {
    env_logger::init();
    let options = CmdOptions::parse();
    log::debug!("{:?}", options);

    let mut list: LinkedList<u32> = LinkedList::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    for i in 1..=options.count {
        list.push_front(i);
    }
    println!("{}", list);
    println!("list size: {}", list.len());
    if let Some(top) = list.pop_front() {
        println!("top element: {}", top);
    }
    println!("{}", list);
    println!("size: {}", list.len());

    let mut list2 = list.clone();
    println!("list == list2: {}", list == list2);
    list2.pop_front();
    println!("list != list2: {}", list != list2);
    println!("list < list2: {}", list < list2);
    println!("list:{}\nlist2:{}", list, list2);

    let first = list2.begin();
    if !first.is_end() {
        let inserted = list2.insert_after(first, 0)?;
        println!("inserted {} after the first element: {}", list2.get(inserted)?, list2);
        let next = list2.erase_after(first)?;
        println!("erased it again: {}", list2);
        if !next.is_end() {
            println!("now following the first element: {}", list2.get(next)?);
        }
    }

    list.swap(&mut list2);
    println!("after swap\nlist:{}\nlist2:{}", list, list2);

    if options.shuffle > 0 {
        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        for _ in 0..options.shuffle {
            let slot = rng.gen_range(0..=list.len());
            let anchor = nth_anchor(&list, slot.checked_sub(1))?;
            list.insert_after(anchor, rng.gen_range(100..1000))?;
        }
        println!("after {} random insertions: {}", options.shuffle, list);
    }

    for val in &list {
        println!("{}", val);
    }
    Ok(())
}
