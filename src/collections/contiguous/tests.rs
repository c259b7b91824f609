#![cfg(test)]

use super::*;

#[test]
fn test_stack_lifo() {
    let mut stack = Stack::new();
    stack.push("a");
    stack.push("b");
    stack.push("c");

    assert_eq!(stack.peek(), Ok(&"c"));
    assert_eq!(stack.len(), 3, "Peeking shouldn't remove anything.");
    assert_eq!(stack.pop(), Ok("c"));
    assert_eq!(stack.pop(), Ok("b"));

    stack.push("d");
    assert_eq!(stack.pop(), Ok("d"));
    assert_eq!(stack.pop(), Ok("a"));
    assert!(stack.is_empty());
}

#[test]
fn test_stack_empty() {
    let mut stack = Stack::<u8>::new();
    assert_eq!(stack.pop(), Err(EmptyStack));
    assert_eq!(stack.peek(), Err(EmptyStack));
    assert_eq!(stack.peek_mut(), Err(EmptyStack));

    stack.push(1);
    stack.pop().expect("an item was pushed");
    assert_eq!(stack.pop(), Err(EmptyStack), "A drained stack should be empty again.");
}

#[test]
fn test_stack_iter() {
    let mut stack: Stack<i32> = (1..=3).collect();
    *stack.peek_mut().expect("stack isn't empty") *= 10;
    stack.extend([4]);

    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), [4, 30, 2, 1]);
    assert_eq!(format!("{stack:?}"), "[4, 30, 2, 1]");
}

#[test]
fn test_queue_fifo() {
    let mut queue = Queue::new();
    queue.enqueue("a");
    queue.enqueue("b");

    assert_eq!(queue.peek(), Ok(&"a"));
    assert_eq!(queue.dequeue(), Ok("a"));

    queue.enqueue("c");
    assert_eq!(queue.dequeue(), Ok("b"));
    assert_eq!(queue.dequeue(), Ok("c"));
    assert!(queue.is_empty());
}

#[test]
fn test_queue_empty() {
    let mut queue = Queue::<u8>::default();
    assert_eq!(queue.dequeue(), Err(EmptyQueue));
    assert_eq!(queue.peek(), Err(EmptyQueue));
    assert_eq!(queue.peek_mut(), Err(EmptyQueue));
    assert_eq!(queue.len(), 0);
}

#[test]
fn test_queue_iter() {
    let mut queue: Queue<char> = "xyz".chars().collect();
    *queue.peek_mut().expect("queue isn't empty") = 'w';
    queue.extend(['!']);

    assert_eq!(queue.iter().collect::<String>(), "wyz!");
    assert_eq!(format!("{queue:?}"), "['w', 'y', 'z', '!']");
}
