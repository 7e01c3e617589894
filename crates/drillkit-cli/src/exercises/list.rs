use std::io::{BufRead, Write};

use anyhow::Result;

use crate::{console::Console, linked_list::LinkedList};

const MENU: &str = "--- Linked List Operations ---\n\
                    1. Insert at head\n\
                    2. Insert at tail\n\
                    3. Insert at index\n\
                    4. Delete at head\n\
                    5. Delete at tail\n\
                    6. Delete at index\n\
                    7. Print list\n\
                    8. Exit";

pub(super) fn run<R: BufRead, W: Write, E: Write>(console: &mut Console<R, W, E>) -> Result<()> {
    let mut list = LinkedList::new();
    writeln!(console.out(), "{MENU}")?;

    loop {
        writeln!(console.out())?;
        let Some(choice) = console.ask_or("Enter your choice", "quit")? else {
            writeln!(console.err(), "Program terminated by user request.")?;
            break;
        };

        match choice {
            1 => {
                let Some(data) = ask_data(console)? else {
                    continue;
                };
                list.push_front(data);
                writeln!(console.out(), "Successfully inserted {data} at head.")?;
            }
            2 => {
                let Some(data) = ask_data(console)? else {
                    continue;
                };
                list.push_back(data);
                writeln!(console.out(), "Successfully inserted {data} at tail.")?;
            }
            3 => {
                let Some(data) = ask_data(console)? else {
                    continue;
                };
                let Some(index) = console.ask_or("Enter index", "cancel")? else {
                    writeln!(console.err(), "Insert operation cancelled by user.")?;
                    continue;
                };
                match usize::try_from(index) {
                    Err(_) => writeln!(console.out(), "Error: Index cannot be negative ({index}).")?,
                    Ok(at) => match list.insert(at, data) {
                        Ok(()) => writeln!(
                            console.out(),
                            "Successfully inserted {data} at index {index}."
                        )?,
                        Err(err) => {
                            log::debug!("insert rejected: {err}");
                            writeln!(
                                console.out(),
                                "Error: Index {index} is out of bounds. \
                                 List has fewer than {index} elements to insert at this position."
                            )?;
                        }
                    },
                }
            }
            4 => match list.pop_front() {
                Some(data) => writeln!(console.out(), "Deleted head node with data: {data}.")?,
                None => writeln!(console.out(), "List is empty. Cannot delete from head.")?,
            },
            5 => match list.pop_back() {
                Some(data) => writeln!(console.out(), "Deleted tail node with data: {data}.")?,
                None => writeln!(console.out(), "List is empty. Cannot delete from tail.")?,
            },
            6 => {
                let Some(index) = console.ask_or("Enter index to delete at", "cancel")? else {
                    writeln!(console.err(), "Delete operation cancelled by user.")?;
                    continue;
                };
                delete_at(console, &mut list, index)?;
            }
            7 => print_list(console, &list)?,
            8 => {
                writeln!(console.out(), "Exiting program.")?;
                break;
            }
            _ => writeln!(
                console.out(),
                "Invalid choice. Please enter a number between 1 and 8."
            )?,
        }
    }

    writeln!(console.out(), "Program terminated.")?;
    Ok(())
}

fn ask_data<R: BufRead, W: Write, E: Write>(console: &mut Console<R, W, E>) -> Result<Option<i32>> {
    let data = console.ask_or("Enter data to insert", "cancel")?;
    if data.is_none() {
        writeln!(console.err(), "Insert operation cancelled by user.")?;
    }
    Ok(data)
}

fn delete_at<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    list: &mut LinkedList,
    index: i32,
) -> Result<()> {
    if list.is_empty() {
        writeln!(console.out(), "List is empty. Cannot delete at index {index}.")?;
        return Ok(());
    }
    let Ok(at) = usize::try_from(index) else {
        writeln!(console.out(), "Error: Index cannot be negative ({index}).")?;
        return Ok(());
    };
    match list.remove(at) {
        Ok(data) => writeln!(
            console.out(),
            "Deleted node at index {index} with data: {data}."
        )?,
        Err(_) => writeln!(
            console.out(),
            "Error: Index {index} is out of bounds. No node to delete at this position."
        )?,
    }
    Ok(())
}

fn print_list<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    list: &LinkedList,
) -> Result<()> {
    if list.is_empty() {
        writeln!(console.out(), "List is empty.")?;
        return Ok(());
    }
    let out = console.out();
    write!(out, "List:")?;
    for data in list.iter() {
        write!(out, " {data}")?;
    }
    writeln!(out)?;
    Ok(())
}
