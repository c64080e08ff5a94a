use cozy_chess::*;

fn piece_char(piece: Piece, color: Color, unicode: bool) -> char {
    let index = piece as usize;
    let chars = match (unicode, color) {
        (false, Color::White) => ['P', 'N', 'B', 'R', 'Q', 'K'],
        (false, Color::Black) => ['p', 'n', 'b', 'r', 'q', 'k'],
        (true, Color::White) => ['♙', '♘', '♗', '♖', '♕', '♔'],
        (true, Color::Black) => ['♟', '♞', '♝', '♜', '♛', '♚']
    };
    chars[index]
}

/// Text board with rank and file labels, `flip` puts Black at the bottom.
pub fn render_board(board: &Board, unicode: bool, flip: bool) -> String {
    let mut ranks = Rank::ALL.to_vec();
    let mut files = File::ALL.to_vec();
    if flip {
        files.reverse();
    } else {
        ranks.reverse();
    }

    let mut out = String::new();
    for &rank in &ranks {
        out.push_str(&format!("{} ", rank as usize + 1));
        for &file in &files {
            let square = Square::new(file, rank);
            let c = match (board.piece_on(square), board.color_on(square)) {
                (Some(piece), Some(color)) => piece_char(piece, color, unicode),
                _ => '.'
            };
            out.push(' ');
            out.push(c);
        }
        out.push('\n');
    }
    out.push_str("  ");
    for &file in &files {
        out.push(' ');
        out.push((b'a' + file as u8) as char);
    }
    out.push('\n');
    out
}
