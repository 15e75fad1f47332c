// sw0/sw1 are the left/right buttons, sw2/sw3 move along X/Y, led0 blinks on
// every report. All switches are active low with pull-ups.

#[cfg(feature = "nrf52840-dk")]
macro_rules! pinout {
    ($p:ident . sw0) => ($p.P0_11);
    ($p:ident . sw1) => ($p.P0_12);
    ($p:ident . sw2) => ($p.P0_24);
    ($p:ident . sw3) => ($p.P0_25);
    ($p:ident . led0) => ($p.P0_13);
    ($p:ident . usbd) => ($p.USBD);
}

// Single user button (SW1); the remaining lines are left unconnected.
#[cfg(feature = "nrf52840-dongle")]
macro_rules! pinout {
    ($p:ident . sw0) => ($p.P1_06);
    ($p:ident . led0) => ($p.P0_06);
    ($p:ident . usbd) => ($p.USBD);
}

#[cfg(feature = "nrf52840-dk")]
macro_rules! board_lines {
    ($p:ident) => {
        edge_mouse::LineSet::new(
            switch(pinout!($p.sw0)),
            switch(pinout!($p.sw1)),
            switch(pinout!($p.sw2)),
            switch(pinout!($p.sw3)),
        )
    };
}

#[cfg(feature = "nrf52840-dongle")]
macro_rules! board_lines {
    ($p:ident) => {
        edge_mouse::LineSet {
            left: Some(switch(pinout!($p.sw0))),
            right: None,
            x: None,
            y: None,
        }
    };
}
