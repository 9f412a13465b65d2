//! Canned answers for the local responder.
//!
//! Each template follows the same rhetorical shape: a framing sentence, a
//! conceptual explanation, one or more fenced and language-tagged code
//! samples, a complexity or best-practices section, and a closing invitation.
//! The content is hand-authored and static; `respond` is a pure lookup.

use crate::classifier::TopicCategory;

/// Look up the canned answer for a topic.
pub fn respond(category: TopicCategory) -> &'static str {
    match category {
        TopicCategory::BinarySearchTree => BINARY_SEARCH_TREE,
        TopicCategory::SortingAlgorithm => SORTING_ALGORITHM,
        TopicCategory::UiComponent => UI_COMPONENT,
        TopicCategory::RestApi => REST_API,
        TopicCategory::Generic => GENERIC,
    }
}

/// Returned directly when a prompt is not development related; the provider
/// chain is never consulted for these.
pub fn non_dev_redirect() -> &'static str {
    NON_DEV_REDIRECT
}

/// Last line of defense: a static answer used only when even the canned
/// template path blows up.
pub fn ultimate_fallback() -> &'static str {
    ULTIMATE_FALLBACK
}

const BINARY_SEARCH_TREE: &str = r#"A Binary Search Tree keeps data sorted while staying fast to search and update. Let me walk you through building one from scratch.

## How a BST works

Every node obeys one rule: values in the left subtree are smaller, values in the right subtree are larger, and both subtrees are themselves valid BSTs. That single invariant is what gives you O(log n) average-case search, insert, and delete.

Here's a complete implementation:

```javascript
class Node {
    constructor(value) {
        this.value = value;
        this.left = null;
        this.right = null;
    }
}

class BinarySearchTree {
    constructor() {
        this.root = null;
    }

    insert(value) {
        const node = new Node(value);
        if (this.root === null) {
            this.root = node;
            return this;
        }
        let current = this.root;
        while (true) {
            if (value === current.value) return undefined; // ignore duplicates
            if (value < current.value) {
                if (current.left === null) {
                    current.left = node;
                    return this;
                }
                current = current.left;
            } else {
                if (current.right === null) {
                    current.right = node;
                    return this;
                }
                current = current.right;
            }
        }
    }

    search(value) {
        let current = this.root;
        while (current) {
            if (value === current.value) return true;
            current = value < current.value ? current.left : current.right;
        }
        return false;
    }

    // Inorder traversal yields the values in sorted order
    inorder(node = this.root, result = []) {
        if (node) {
            this.inorder(node.left, result);
            result.push(node.value);
            this.inorder(node.right, result);
        }
        return result;
    }
}

const bst = new BinarySearchTree();
[50, 30, 70, 20, 40, 60, 80].forEach(v => bst.insert(v));

console.log(bst.search(40));  // true
console.log(bst.search(25));  // false
console.log(bst.inorder());   // [20, 30, 40, 50, 60, 70, 80]
```

## Complexity

- **Insert**: O(log n) average, O(n) worst case
- **Search**: O(log n) average, O(n) worst case
- **Space**: O(n)

The worst case shows up when inserts arrive in sorted order and the tree degenerates into a linked list. Self-balancing variants (AVL, Red-Black) fix that at the cost of more bookkeeping.

**Key advantages:**
✅ Fast search and insertion in the typical case
✅ Sorted order maintained automatically
✅ Trivial sorted traversal

Want me to show you deletion or how tree balancing works?"#;

const SORTING_ALGORITHM: &str = r#"QuickSort is one of the most widely used sorting algorithms, and the core idea is surprisingly compact. Let me walk you through it.

## The core idea

QuickSort divides and conquers:
1. Pick a pivot element
2. Partition the array so smaller elements land left of the pivot and larger ones right
3. Recursively sort both sides

Here's a simple version first, then the in-place version you'd actually ship:

```javascript
// Readable version - allocates new arrays
function quickSort(arr) {
    if (arr.length <= 1) {
        return arr;
    }
    const pivot = arr[Math.floor(arr.length / 2)];
    const left = arr.filter(x => x < pivot);
    const middle = arr.filter(x => x === pivot); // keeps duplicates
    const right = arr.filter(x => x > pivot);
    return [...quickSort(left), ...middle, ...quickSort(right)];
}
```

```javascript
// In-place version - no extra arrays
function quickSortInPlace(arr, low = 0, high = arr.length - 1) {
    if (low < high) {
        const pivotIndex = partition(arr, low, high);
        quickSortInPlace(arr, low, pivotIndex - 1);
        quickSortInPlace(arr, pivotIndex + 1, high);
    }
    return arr;
}

function partition(arr, low, high) {
    const pivot = arr[high];
    let i = low - 1;
    for (let j = low; j < high; j++) {
        if (arr[j] < pivot) {
            i++;
            [arr[i], arr[j]] = [arr[j], arr[i]];
        }
    }
    [arr[i + 1], arr[high]] = [arr[high], arr[i + 1]];
    return i + 1;
}

console.log(quickSortInPlace([64, 34, 25, 12, 22, 11, 90, 88]));
// [11, 12, 22, 25, 34, 64, 88, 90]
```

## Performance

- **Average case**: O(n log n)
- **Worst case**: O(n²) - already-sorted input with a poor pivot choice
- **Space**: O(log n) for the recursion stack

## Pro tips

💡 Randomize the pivot (or use median-of-three) to dodge the worst case

💡 Switch to insertion sort below ~10 elements

💡 QuickSort is not stable - equal elements may swap relative order

The in-place version is the production choice; the readable one is for building intuition.

Want to see the randomized pivot variant or a comparison with MergeSort?"#;

const UI_COMPONENT: &str = r#"Let me show you a practical React component built with modern hooks. This one covers the patterns you'll reach for constantly: state, effects, forms, and list rendering.

## Todo component

```javascript
import { useState, useEffect } from 'react';

function TodoApp() {
    const [todos, setTodos] = useState([]);
    const [input, setInput] = useState('');
    const [filter, setFilter] = useState('all');

    // Persist whenever the list changes
    useEffect(() => {
        localStorage.setItem('todos', JSON.stringify(todos));
    }, [todos]);

    // Load once on mount
    useEffect(() => {
        const saved = localStorage.getItem('todos');
        if (saved) setTodos(JSON.parse(saved));
    }, []);

    const addTodo = (e) => {
        e.preventDefault();
        if (!input.trim()) return;
        setTodos([...todos, {
            id: Date.now(),
            text: input.trim(),
            completed: false,
        }]);
        setInput('');
    };

    const toggleTodo = (id) => {
        setTodos(todos.map(todo =>
            todo.id === id ? { ...todo, completed: !todo.completed } : todo
        ));
    };

    const visible = todos.filter(todo => {
        if (filter === 'active') return !todo.completed;
        if (filter === 'completed') return todo.completed;
        return true;
    });

    return (
        <div>
            <form onSubmit={addTodo}>
                <input
                    value={input}
                    onChange={(e) => setInput(e.target.value)}
                    placeholder="What needs to be done?"
                />
                <button type="submit" disabled={!input.trim()}>Add</button>
            </form>
            <div>
                {['all', 'active', 'completed'].map(f => (
                    <button key={f} onClick={() => setFilter(f)}>{f}</button>
                ))}
            </div>
            <ul>
                {visible.map(todo => (
                    <li key={todo.id}>
                        <input
                            type="checkbox"
                            checked={todo.completed}
                            onChange={() => toggleTodo(todo.id)}
                        />
                        {todo.text}
                    </li>
                ))}
            </ul>
        </div>
    );
}

export default TodoApp;
```

## The hooks in play

**useState** holds component state; **useEffect** runs side effects after render, re-running only when its dependency array changes. An empty array means "once on mount".

## Patterns worth keeping

✅ Validate input before touching state
✅ Use functional updates when new state depends on old: `setState(prev => prev + 1)`
✅ Keys in lists must be stable ids, never array indexes
✅ Return a cleanup function from effects that subscribe to anything

This shape adapts directly to profiles, carts, or any list-backed UI.

Want to go further with custom hooks or context?"#;

const REST_API: &str = r#"Let me show you a complete REST API with Express covering all the CRUD operations, with validation and consistent error handling.

## Users API

```javascript
const express = require('express');
const app = express();

app.use(express.json());

// In-memory stand-in for a database
let users = [
    { id: 1, name: 'John Doe', email: 'john@example.com', role: 'admin' },
    { id: 2, name: 'Jane Smith', email: 'jane@example.com', role: 'user' }
];

// List with pagination and optional role filter
app.get('/api/users', (req, res) => {
    const { page = 1, limit = 10, role } = req.query;
    let filtered = role ? users.filter(u => u.role === role) : users;
    const start = (page - 1) * limit;
    res.json({
        success: true,
        data: filtered.slice(start, start + Number(limit)),
        pagination: { page: Number(page), limit: Number(limit), total: filtered.length }
    });
});

app.get('/api/users/:id', (req, res) => {
    const user = users.find(u => u.id === parseInt(req.params.id));
    if (!user) {
        return res.status(404).json({ success: false, message: 'User not found' });
    }
    res.json({ success: true, data: user });
});

app.post('/api/users', (req, res) => {
    const { name, email, role = 'user' } = req.body;
    if (!name || !email) {
        return res.status(400).json({ success: false, message: 'Name and email are required' });
    }
    if (users.some(u => u.email === email)) {
        return res.status(409).json({ success: false, message: 'Email already exists' });
    }
    const user = {
        id: users.length ? Math.max(...users.map(u => u.id)) + 1 : 1,
        name: name.trim(),
        email: email.toLowerCase().trim(),
        role,
    };
    users.push(user);
    res.status(201).json({ success: true, data: user });
});

app.put('/api/users/:id', (req, res) => {
    const user = users.find(u => u.id === parseInt(req.params.id));
    if (!user) {
        return res.status(404).json({ success: false, message: 'User not found' });
    }
    const { name, email, role } = req.body;
    if (!name || !email) {
        return res.status(400).json({ success: false, message: 'Name and email are required' });
    }
    Object.assign(user, { name: name.trim(), email: email.toLowerCase().trim(), role: role || user.role });
    res.json({ success: true, data: user });
});

app.delete('/api/users/:id', (req, res) => {
    const index = users.findIndex(u => u.id === parseInt(req.params.id));
    if (index === -1) {
        return res.status(404).json({ success: false, message: 'User not found' });
    }
    const [removed] = users.splice(index, 1);
    res.json({ success: true, data: removed });
});

const PORT = process.env.PORT || 3000;
app.listen(PORT, () => console.log(`Server running on port ${PORT}`));
```

## Status codes that matter

- 200 OK, 201 Created on success
- 400 Bad Request for invalid input
- 404 Not Found, 409 Conflict for resource problems
- 500 only for genuine server faults

## Best practices

✅ Validate every write
✅ Keep the response envelope consistent
✅ Paginate list endpoints
✅ Put configuration in environment variables

Test it with curl:

```bash
curl -X POST http://localhost:3000/api/users \
  -H "Content-Type: application/json" \
  -d '{"name":"Bob","email":"bob@example.com"}'
```

Want to add authentication, a real database, or rate limiting next?"#;

const GENERIC: &str = r#"Happy to help with whatever you're building! Here's the kind of thing I can do, with a taste of each.

**Learning & understanding**
- Programming concepts and fundamentals
- Data structures and algorithms
- Design patterns and best practices

**Building projects**
- Web applications (React, Vue, Angular)
- Backend APIs (Node.js, Express, Python)
- Command-line tools

**Debugging & optimization**
- Tracking down bugs
- Performance work and refactoring

A quick example of the level of detail you can expect:

```javascript
// Debounce: run fn only after `wait` ms of silence
function debounce(fn, wait) {
    let timer;
    return (...args) => {
        clearTimeout(timer);
        timer = setTimeout(() => fn(...args), wait);
    };
}

const onResize = debounce(() => console.log('settled'), 250);
window.addEventListener('resize', onResize);
```

## Try asking me:

💡 "Build a REST API with user authentication"
💡 "Explain how React hooks work with examples"
💡 "Implement a binary search tree"
💡 "Help me debug this async function"

What would you like to work on?"#;

const NON_DEV_REDIRECT: &str = r#"I appreciate you reaching out! However, I'm specifically designed to help with programming and software development questions.

I'd be happy to help you with things like:

- **Writing code** - Functions, classes, algorithms, complete applications
- **Debugging** - Finding and fixing errors in your code
- **Learning** - Programming concepts, best practices, design patterns
- **Building projects** - Web apps, APIs, tools, and more
- **Code reviews** - Improving structure, performance, and readability

For example, I can help with questions like:
- "How do I create a REST API with authentication?"
- "Can you help debug this React component?"
- "What's the best way to implement a binary search tree?"

Feel free to ask any programming-related question, and I'll be glad to help! 🚀"#;

const ULTIMATE_FALLBACK: &str = r#"Hey there! I'm here to help you with coding and development.

I can assist with:

- **Writing code** - From simple functions to complete applications
- **Debugging** - Track down and fix those pesky bugs
- **Learning** - Understand programming concepts step-by-step
- **Building projects** - Create web apps, APIs, tools, and more

Just ask me about any programming topic, and let's build something great together!

What would you like to work on today?"#;
