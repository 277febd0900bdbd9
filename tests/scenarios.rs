use fundamentals::{BinarySearchTree, BoundedStack, CollectionError, Queue, SinglyLinkedList};

#[test]
fn stack_with_capacity_three() {
    let mut stack = BoundedStack::new(3);
    assert!(stack.push(10));
    assert!(stack.push(20));
    assert!(stack.push(30));
    assert!(!stack.push(40));

    assert_eq!(stack.pop(), Some(30));
    assert_eq!(stack.pop(), Some(20));
    assert_eq!(stack.pop(), Some(10));
    assert_eq!(stack.pop(), None);
}

#[test]
fn stack_full_converts_into_collection_error() {
    fn fill(stack: &mut BoundedStack<u8>) -> Result<(), CollectionError> {
        for item in 0..4 {
            stack.try_push(item)?;
        }
        Ok(())
    }

    let mut stack = BoundedStack::new(2);
    assert_eq!(fill(&mut stack), Err(CollectionError::Full { capacity: 2 }));
    assert_eq!(stack.size(), 2);
}

#[test]
fn queue_of_strings() {
    let mut queue = Queue::new();
    queue.enqueue("First");
    queue.enqueue("Second");
    queue.enqueue("Third");

    assert_eq!(queue.dequeue(), Some("First"));
    assert_eq!(queue.dequeue(), Some("Second"));
    assert_eq!(queue.dequeue(), Some("Third"));
    assert_eq!(queue.dequeue(), None);
    assert_eq!(queue.try_dequeue(), Err(CollectionError::Empty));
}

#[test]
fn linked_list_append_prepend_delete() {
    let mut list = SinglyLinkedList::new();
    list.append(10);
    list.append(20);
    list.append(30);
    list.prepend(5);
    assert_eq!(list.traverse().copied().collect::<Vec<_>>(), vec![5, 10, 20, 30]);

    assert!(list.delete(&20));
    assert_eq!(list.traverse().copied().collect::<Vec<_>>(), vec![5, 10, 30]);

    assert!(!list.delete(&99));
    assert_eq!(list.traverse().copied().collect::<Vec<_>>(), vec![5, 10, 30]);
}

#[test]
fn bst_in_order_then_two_child_delete() {
    let mut tree = BinarySearchTree::new();
    for key in [50, 30, 70, 20, 40, 60, 80] {
        tree.insert(key, format!("value-{key}"));
    }
    assert_eq!(
        tree.keys().copied().collect::<Vec<_>>(),
        vec![20, 30, 40, 50, 60, 70, 80]
    );

    assert!(tree.delete(&30));
    assert_eq!(
        tree.keys().copied().collect::<Vec<_>>(),
        vec![20, 40, 50, 60, 70, 80]
    );
    assert_eq!(tree.search(&30), None);
    assert_eq!(tree.search(&40).map(String::as_str), Some("value-40"));

    assert!(!tree.delete(&30));
    assert!(!tree.delete(&30));
    assert_eq!(tree.len(), 6);
}

#[test]
fn bst_duplicate_insert_updates_in_place() {
    let mut tree = BinarySearchTree::new();
    tree.insert("k", 1);
    tree.insert("k", 2);

    assert_eq!(tree.len(), 1);
    assert_eq!(tree.search(&"k"), Some(&2));
    assert_eq!(tree.traverse_in_order().collect::<Vec<_>>(), vec![(&"k", &2)]);
}
