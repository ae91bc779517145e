//! 8x8 bitmap glyph table indexed by legacy code page 437 slot.
//!
//! Each glyph is eight row bytes, top row first. Bit 0 of a row byte is the
//! leftmost pixel. Printable ASCII, the accented Latin-1 slots 128..=154 and
//! the full block (219) are populated; every other slot is blank.

pub(crate) const GLYPH_COUNT: usize = 256;

#[rustfmt::skip]
pub(crate) static FONT8X8: [[u8; 8]; GLYPH_COUNT] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //   0
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //   1
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //   2
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //   3
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //   4
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //   5
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //   6
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //   7
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //   8
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //   9
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //  10
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //  11
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //  12
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //  13
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //  14
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //  15
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //  16
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //  17
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //  18
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //  19
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //  20
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //  21
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //  22
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //  23
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //  24
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //  25
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //  26
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //  27
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //  28
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //  29
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //  30
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //  31
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //  32  
    [0x18, 0x3C, 0x3C, 0x18, 0x18, 0x00, 0x18, 0x00], //  33 !
    [0x36, 0x36, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], //  34 "
    [0x36, 0x36, 0x7F, 0x36, 0x7F, 0x36, 0x36, 0x00], //  35 #
    [0x0C, 0x3E, 0x03, 0x1E, 0x30, 0x1F, 0x0C, 0x00], //  36 $
    [0x00, 0x63, 0x33, 0x18, 0x0C, 0x66, 0x63, 0x00], //  37 %
    [0x1C, 0x36, 0x1C, 0x6E, 0x3B, 0x33, 0x6E, 0x00], //  38 &
    [0x06, 0x06, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00], //  39 '
    [0x18, 0x0C, 0x06, 0x06, 0x06, 0x0C, 0x18, 0x00], //  40 (
    [0x06, 0x0C, 0x18, 0x18, 0x18, 0x0C, 0x06, 0x00], //  41 )
    [0x00, 0x66, 0x3C, 0xFF, 0x3C, 0x66, 0x00, 0x00], //  42 *
    [0x00, 0x0C, 0x0C, 0x3F, 0x0C, 0x0C, 0x00, 0x00], //  43 +
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x06], //  44 ,
    [0x00, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00], //  45 -
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00], //  46 .
    [0x60, 0x30, 0x18, 0x0C, 0x06, 0x03, 0x01, 0x00], //  47 /
    [0x3E, 0x63, 0x73, 0x7B, 0x6F, 0x67, 0x3E, 0x00], //  48 0
    [0x0C, 0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x3F, 0x00], //  49 1
    [0x1E, 0x33, 0x30, 0x1C, 0x06, 0x33, 0x3F, 0x00], //  50 2
    [0x1E, 0x33, 0x30, 0x1C, 0x30, 0x33, 0x1E, 0x00], //  51 3
    [0x38, 0x3C, 0x36, 0x33, 0x7F, 0x30, 0x78, 0x00], //  52 4
    [0x3F, 0x03, 0x1F, 0x30, 0x30, 0x33, 0x1E, 0x00], //  53 5
    [0x1C, 0x06, 0x03, 0x1F, 0x33, 0x33, 0x1E, 0x00], //  54 6
    [0x3F, 0x33, 0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x00], //  55 7
    [0x1E, 0x33, 0x33, 0x1E, 0x33, 0x33, 0x1E, 0x00], //  56 8
    [0x1E, 0x33, 0x33, 0x3E, 0x30, 0x18, 0x0E, 0x00], //  57 9
    [0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x00], //  58 :
    [0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x06], //  59 ;
    [0x18, 0x0C, 0x06, 0x03, 0x06, 0x0C, 0x18, 0x00], //  60 <
    [0x00, 0x00, 0x3F, 0x00, 0x00, 0x3F, 0x00, 0x00], //  61 =
    [0x06, 0x0C, 0x18, 0x30, 0x18, 0x0C, 0x06, 0x00], //  62 >
    [0x1E, 0x33, 0x30, 0x18, 0x0C, 0x00, 0x0C, 0x00], //  63 ?
    [0x3E, 0x63, 0x7B, 0x7B, 0x7B, 0x03, 0x1E, 0x00], //  64 @
    [0x0C, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x00], //  65 A
    [0x3F, 0x66, 0x66, 0x3E, 0x66, 0x66, 0x3F, 0x00], //  66 B
    [0x3C, 0x66, 0x03, 0x03, 0x03, 0x66, 0x3C, 0x00], //  67 C
    [0x1F, 0x36, 0x66, 0x66, 0x66, 0x36, 0x1F, 0x00], //  68 D
    [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x46, 0x7F, 0x00], //  69 E
    [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x06, 0x0F, 0x00], //  70 F
    [0x3C, 0x66, 0x03, 0x03, 0x73, 0x66, 0x7C, 0x00], //  71 G
    [0x33, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x33, 0x00], //  72 H
    [0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], //  73 I
    [0x78, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1E, 0x00], //  74 J
    [0x67, 0x66, 0x36, 0x1E, 0x36, 0x66, 0x67, 0x00], //  75 K
    [0x0F, 0x06, 0x06, 0x06, 0x46, 0x66, 0x7F, 0x00], //  76 L
    [0x63, 0x77, 0x7F, 0x7F, 0x6B, 0x63, 0x63, 0x00], //  77 M
    [0x63, 0x67, 0x6F, 0x7B, 0x73, 0x63, 0x63, 0x00], //  78 N
    [0x1C, 0x36, 0x63, 0x63, 0x63, 0x36, 0x1C, 0x00], //  79 O
    [0x3F, 0x66, 0x66, 0x3E, 0x06, 0x06, 0x0F, 0x00], //  80 P
    [0x1E, 0x33, 0x33, 0x33, 0x3B, 0x1E, 0x38, 0x00], //  81 Q
    [0x3F, 0x66, 0x66, 0x3E, 0x36, 0x66, 0x67, 0x00], //  82 R
    [0x1E, 0x33, 0x07, 0x0E, 0x38, 0x33, 0x1E, 0x00], //  83 S
    [0x3F, 0x2D, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], //  84 T
    [0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x3F, 0x00], //  85 U
    [0x33, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00], //  86 V
    [0x63, 0x63, 0x63, 0x6B, 0x7F, 0x77, 0x63, 0x00], //  87 W
    [0x63, 0x63, 0x36, 0x1C, 0x1C, 0x36, 0x63, 0x00], //  88 X
    [0x33, 0x33, 0x33, 0x1E, 0x0C, 0x0C, 0x1E, 0x00], //  89 Y
    [0x7F, 0x63, 0x31, 0x18, 0x4C, 0x66, 0x7F, 0x00], //  90 Z
    [0x1E, 0x06, 0x06, 0x06, 0x06, 0x06, 0x1E, 0x00], //  91 [
    [0x03, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x40, 0x00], //  92 \\
    [0x1E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x1E, 0x00], //  93 ]
    [0x08, 0x1C, 0x36, 0x63, 0x00, 0x00, 0x00, 0x00], //  94 ^
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF], //  95 _
    [0x0C, 0x0C, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00], //  96 `
    [0x00, 0x00, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], //  97 a
    [0x07, 0x06, 0x06, 0x3E, 0x66, 0x66, 0x3B, 0x00], //  98 b
    [0x00, 0x00, 0x1E, 0x33, 0x03, 0x33, 0x1E, 0x00], //  99 c
    [0x38, 0x30, 0x30, 0x3E, 0x33, 0x33, 0x6E, 0x00], // 100 d
    [0x00, 0x00, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // 101 e
    [0x1C, 0x36, 0x06, 0x0F, 0x06, 0x06, 0x0F, 0x00], // 102 f
    [0x00, 0x00, 0x6E, 0x33, 0x33, 0x3E, 0x30, 0x1F], // 103 g
    [0x07, 0x06, 0x36, 0x6E, 0x66, 0x66, 0x67, 0x00], // 104 h
    [0x0C, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 105 i
    [0x30, 0x00, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1E], // 106 j
    [0x07, 0x06, 0x66, 0x36, 0x1E, 0x36, 0x67, 0x00], // 107 k
    [0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 108 l
    [0x00, 0x00, 0x33, 0x7F, 0x7F, 0x6B, 0x63, 0x00], // 109 m
    [0x00, 0x00, 0x1F, 0x33, 0x33, 0x33, 0x33, 0x00], // 110 n
    [0x00, 0x00, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // 111 o
    [0x00, 0x00, 0x3B, 0x66, 0x66, 0x3E, 0x06, 0x0F], // 112 p
    [0x00, 0x00, 0x6E, 0x33, 0x33, 0x3E, 0x30, 0x78], // 113 q
    [0x00, 0x00, 0x3B, 0x6E, 0x66, 0x06, 0x0F, 0x00], // 114 r
    [0x00, 0x00, 0x3E, 0x03, 0x1E, 0x30, 0x1F, 0x00], // 115 s
    [0x08, 0x0C, 0x3E, 0x0C, 0x0C, 0x2C, 0x18, 0x00], // 116 t
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x33, 0x6E, 0x00], // 117 u
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00], // 118 v
    [0x00, 0x00, 0x63, 0x6B, 0x7F, 0x7F, 0x36, 0x00], // 119 w
    [0x00, 0x00, 0x63, 0x36, 0x1C, 0x36, 0x63, 0x00], // 120 x
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x3E, 0x30, 0x1F], // 121 y
    [0x00, 0x00, 0x3F, 0x19, 0x0C, 0x26, 0x3F, 0x00], // 122 z
    [0x38, 0x0C, 0x0C, 0x07, 0x0C, 0x0C, 0x38, 0x00], // 123 {
    [0x18, 0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x00], // 124 |
    [0x07, 0x0C, 0x0C, 0x38, 0x0C, 0x0C, 0x07, 0x00], // 125 }
    [0x6E, 0x3B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 126 ~
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 127
    [0x3C, 0x66, 0x03, 0x03, 0x03, 0x66, 0x3C, 0x0C], // 128 Ç
    [0x33, 0x00, 0x33, 0x33, 0x33, 0x33, 0x6E, 0x00], // 129 ü
    [0x30, 0x00, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // 130 é
    [0x0C, 0x33, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // 131 â
    [0x33, 0x00, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // 132 ä
    [0x06, 0x00, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // 133 à
    [0x0C, 0x12, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // 134 å
    [0x00, 0x00, 0x1E, 0x33, 0x03, 0x33, 0x1E, 0x0C], // 135 ç
    [0x0C, 0x33, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // 136 ê
    [0x33, 0x00, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // 137 ë
    [0x06, 0x00, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // 138 è
    [0x33, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 139 ï
    [0x0C, 0x33, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 140 î
    [0x06, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 141 ì
    [0x33, 0x0C, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x33], // 142 Ä
    [0x0C, 0x12, 0x0C, 0x1E, 0x33, 0x3F, 0x33, 0x33], // 143 Å
    [0x30, 0x7F, 0x46, 0x16, 0x1E, 0x16, 0x46, 0x7F], // 144 É
    [0x00, 0x00, 0x3B, 0x6C, 0x7E, 0x0D, 0x7B, 0x00], // 145 æ
    [0x7C, 0x36, 0x33, 0x7F, 0x33, 0x33, 0x73, 0x00], // 146 Æ
    [0x0C, 0x33, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // 147 ô
    [0x33, 0x00, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // 148 ö
    [0x06, 0x00, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // 149 ò
    [0x0C, 0x33, 0x33, 0x33, 0x33, 0x33, 0x6E, 0x00], // 150 û
    [0x06, 0x00, 0x33, 0x33, 0x33, 0x33, 0x6E, 0x00], // 151 ù
    [0x33, 0x00, 0x33, 0x33, 0x33, 0x3E, 0x30, 0x1F], // 152 ÿ
    [0x63, 0x1C, 0x36, 0x63, 0x63, 0x63, 0x36, 0x1C], // 153 Ö
    [0x33, 0x00, 0x33, 0x33, 0x33, 0x33, 0x33, 0x3F], // 154 Ü
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 155
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 156
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 157
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 158
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 159
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 160
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 161
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 162
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 163
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 164
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 165
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 166
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 167
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 168
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 169
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 170
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 171
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 172
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 173
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 174
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 175
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 176
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 177
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 178
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 179
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 180
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 181
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 182
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 183
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 184
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 185
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 186
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 187
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 188
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 189
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 190
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 191
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 192
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 193
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 194
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 195
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 196
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 197
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 198
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 199
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 200
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 201
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 202
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 203
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 204
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 205
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 206
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 207
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 208
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 209
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 210
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 211
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 212
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 213
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 214
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 215
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 216
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 217
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 218
    [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF], // 219 full block
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 220
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 221
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 222
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 223
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 224
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 225
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 226
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 227
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 228
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 229
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 230
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 231
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 232
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 233
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 234
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 235
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 236
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 237
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 238
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 239
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 240
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 241
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 242
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 243
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 244
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 245
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 246
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 247
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 248
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 249
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 250
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 251
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 252
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 253
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 254
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 255
];
