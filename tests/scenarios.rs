//! End-to-end edit scenarios on small tours.

use u_tour::editor::TourEditor;
use u_tour::graph::{Edit, EditableTourGraph};
use u_tour::TourError;

fn loaded(perm: &[usize]) -> EditableTourGraph {
    let mut g = EditableTourGraph::new(perm.len()).expect("valid size");
    g.from_path(perm).expect("valid permutation");
    g
}

#[test]
fn test_open_path_is_not_a_tour() {
    let mut g = loaded(&[1, 2, 3, 4, 5]);
    g.do_disconnect(2, 3).expect("linked");
    g.do_disconnect(3, 2).expect("linked");

    let mut out = Vec::new();
    assert!(!g.to_path(&mut out));

    g.undo_disconnect(3, 2).expect("logged");
    g.undo_disconnect(2, 3).expect("logged");
    assert!(g.to_path(&mut out));
    assert_eq!(out, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_two_fragments_are_not_a_tour() {
    let mut g = loaded(&[1, 2, 3, 4, 5]);
    g.do_disconnect(1, 2).expect("linked");
    g.do_disconnect(2, 1).expect("linked");
    g.do_disconnect(3, 4).expect("linked");
    g.do_disconnect(4, 3).expect("linked");
    g.do_connect(1, 4).expect("free");
    g.do_connect(4, 1).expect("free");
    g.do_connect(2, 3).expect("free");
    g.do_connect(3, 2).expect("free");

    // {2, 3} doubled up and {1, 4, 5} as a triangle: every node has degree 2.
    assert!(g.graph().nodes().all(|n| n.degree() == 2));
    assert_eq!(g.tour(), None);
}

#[test]
fn test_two_opt_segment_reversal() {
    let mut g = loaded(&[1, 2, 3, 4, 5, 6, 7, 8]);
    g.do_disconnect(2, 3).expect("linked");
    g.do_disconnect(3, 2).expect("linked");
    g.do_disconnect(4, 5).expect("linked");
    g.do_disconnect(5, 4).expect("linked");
    g.do_connect(2, 4).expect("free");
    g.do_connect(4, 2).expect("free");
    g.do_connect(3, 5).expect("free");
    g.do_connect(5, 3).expect("free");

    assert_eq!(g.tour(), Some(vec![1, 2, 4, 3, 5, 6, 7, 8]));
    g.commit();
    assert!(g.is_clean());
    assert_eq!(
        g.undo_connect(5, 3).unwrap_err(),
        TourError::EmptyUndoLog { node: 5 }
    );
    assert_eq!(g.tour(), Some(vec![1, 2, 4, 3, 5, 6, 7, 8]));
}

#[test]
fn test_graph_reused_across_many_moves() {
    let mut g = loaded(&[1, 2, 3, 4, 5, 6]);
    let split = [
        Edit::Disconnect(1, 2),
        Edit::Disconnect(4, 5),
        Edit::Connect(1, 5),
        Edit::Connect(2, 4),
    ];
    for _ in 0..100 {
        assert!(!g.try_move(&split).expect("legal edits"));
        g.rollback().expect("journal consistent");
    }
    assert!(g.is_clean());
    assert_eq!(g.tour(), Some(vec![1, 2, 3, 4, 5, 6]));

    let reverse = [
        Edit::Disconnect(1, 2),
        Edit::Disconnect(4, 5),
        Edit::Connect(1, 4),
        Edit::Connect(2, 5),
    ];
    assert!(g.try_move(&reverse).expect("legal edits"));
    TourEditor::commit(&mut g);
    assert_eq!(g.tour(), Some(vec![1, 4, 3, 2, 5, 6]));
}

#[test]
fn test_transaction_after_committed_move() {
    let mut g = loaded(&[1, 2, 3, 4, 5, 6, 7, 8]);
    {
        let mut tx = g.begin().expect("no pending move");
        tx.apply(Edit::Disconnect(2, 3)).expect("linked");
        tx.apply(Edit::Disconnect(4, 5)).expect("linked");
        tx.apply(Edit::Connect(2, 4)).expect("free");
        tx.apply(Edit::Connect(3, 5)).expect("free");
        let mut out = Vec::new();
        assert!(tx.probe(&mut out));
        tx.commit();
    }
    {
        let mut tx = g.begin().expect("no pending move");
        tx.disconnect_edge(6, 7).expect("linked");
        tx.rollback().expect("journal consistent");
    }
    assert_eq!(g.tour(), Some(vec![1, 2, 4, 3, 5, 6, 7, 8]));
}
