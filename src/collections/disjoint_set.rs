//! 并查集（Union-Find）
//!
//! 路径压缩 + 按秩合并。Kruskal 依赖 `union` 的返回值做环检测，
//! 连通性校验用它统计连通分量。

use std::collections::HashMap;
use std::hash::Hash;

/// 并查集
pub struct DisjointSet<T: Copy + Eq + Hash> {
    parent: HashMap<T, T>,
    rank: HashMap<T, u32>,
}

impl<T: Copy + Eq + Hash> DisjointSet<T> {
    /// 创建空并查集
    pub fn new() -> Self {
        Self {
            parent: HashMap::new(),
            rank: HashMap::new(),
        }
    }

    /// 创建包含 x 的单元素集合；x 已存在时不做任何事
    /// （不会重置已有的父指针或秩）
    pub fn make_set(&mut self, x: T) {
        if !self.parent.contains_key(&x) {
            self.parent.insert(x, x);
            self.rank.insert(x, 0);
        }
    }

    /// 返回 x 所在集合的代表元，沿途节点全部压缩到根；
    /// x 未经 make_set 注册时返回 None
    pub fn find(&mut self, x: T) -> Option<T> {
        if !self.parent.contains_key(&x) {
            return None;
        }

        // 第一趟找根
        let mut root = x;
        while self.parent[&root] != root {
            root = self.parent[&root];
        }

        // 第二趟压缩路径
        let mut current = x;
        while current != root {
            let next = self.parent[&current];
            self.parent.insert(current, root);
            current = next;
        }

        Some(root)
    }

    /// 合并 x 与 y 所在的集合，按秩合并。
    /// 发生合并返回 true；二者已在同一集合返回 false。
    pub fn union(&mut self, x: T, y: T) -> bool {
        let (root_x, root_y) = match (self.find(x), self.find(y)) {
            (Some(a), Some(b)) => (a, b),
            _ => return false,
        };

        if root_x == root_y {
            return false;
        }

        let rank_x = self.rank[&root_x];
        let rank_y = self.rank[&root_y];

        if rank_x < rank_y {
            self.parent.insert(root_x, root_y);
        } else if rank_x > rank_y {
            self.parent.insert(root_y, root_x);
        } else {
            self.parent.insert(root_y, root_x);
            self.rank.insert(root_x, rank_x + 1);
        }

        true
    }

    /// 元素数量
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// 当前集合（连通分量）个数
    pub fn set_count(&mut self) -> usize {
        let elements: Vec<T> = self.parent.keys().copied().collect();
        let mut roots = std::collections::HashSet::new();
        for x in elements {
            if let Some(root) = self.find(x) {
                roots.insert(root);
            }
        }
        roots.len()
    }
}

impl<T: Copy + Eq + Hash> Default for DisjointSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut ds = DisjointSet::new();
        ds.make_set('a');
        ds.make_set('b');

        // 未合并前各自为代表元
        assert_ne!(ds.find('a'), ds.find('b'));
        assert_eq!(ds.find('a'), Some('a'));
    }

    #[test]
    fn test_union_chain() {
        let mut ds = DisjointSet::new();
        ds.make_set('a');
        ds.make_set('b');
        ds.make_set('c');

        assert!(ds.union('a', 'b'));
        assert!(ds.union('b', 'c'));

        // union(a,b) + union(b,c) 之后 a 与 c 同组
        assert_eq!(ds.find('a'), ds.find('c'));

        // 重复合并返回 false
        assert!(!ds.union('a', 'c'));
    }

    #[test]
    fn test_make_set_idempotent() {
        let mut ds = DisjointSet::new();
        ds.make_set(1u32);
        ds.make_set(2u32);
        ds.union(1, 2);

        // 再次 make_set 不得拆散已有集合
        ds.make_set(1);
        assert_eq!(ds.find(1), ds.find(2));
    }

    #[test]
    fn test_set_count() {
        let mut ds = DisjointSet::new();
        for i in 0u32..5 {
            ds.make_set(i);
        }
        assert_eq!(ds.set_count(), 5);

        ds.union(0, 1);
        ds.union(2, 3);
        assert_eq!(ds.set_count(), 3);

        ds.union(1, 2);
        assert_eq!(ds.set_count(), 2);
    }

    #[test]
    fn test_find_unknown() {
        let mut ds: DisjointSet<u32> = DisjointSet::new();
        assert_eq!(ds.find(7), None);
        assert!(!ds.union(7, 8));
    }
}
