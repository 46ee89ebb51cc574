#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

// https://dev.to/theembeddedrustacean/embedded-rust-embassy-gpio-button-controlled-blinking-3ee6
// https://www.youtube.com/watch?v=dab_vzVDr_M

#[cfg(target_os = "none")]
mod firmware {
    use despi_m02_crossing::config::CHANNEL_CAPACITY;
    use despi_m02_crossing::io::{Board, EmbassyTick};
    use despi_m02_crossing::trafficlight::state_table::StateId;
    use despi_m02_crossing::{Cycle, TrafficLight};
    use embassy_executor::Spawner;
    use embassy_stm32::gpio::Pin;
    use embassy_stm32::mode::Async;
    use embassy_stm32::usart::{Config, Uart};
    use embassy_stm32::{bind_interrupts, peripherals, usart};
    use embassy_sync::{
        blocking_mutex::raw::ThreadModeRawMutex,
        channel::{Channel, Receiver},
    };
    use panic_halt as _;

    #[cfg(feature = "defmt")]
    use defmt_rtt as _;

    bind_interrupts!(struct Irqs {
        USART1 => usart::InterruptHandler<peripherals::USART1>;
    });

    static CYCLES: Channel<ThreadModeRawMutex, Cycle, CHANNEL_CAPACITY> = Channel::new();

    const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

    // Writing to the serial port is slow compared to a tick, so it happens
    // here and not in the traffic light loop.
    #[embassy_executor::task]
    async fn log_task(
        mut usart: Uart<'static, Async>,
        cycles: Receiver<'static, ThreadModeRawMutex, Cycle, CHANNEL_CAPACITY>,
    ) -> ! {
        log_line(
            &mut usart,
            &[b"crossing started in ", StateId::INITIAL.name().as_bytes()],
        )
        .await;

        loop {
            let cycle = cycles.receive().await;
            let flags = [HEX_DIGITS[cycle.flags.index()]];
            log_line(
                &mut usart,
                &[
                    cycle.from.name().as_bytes(),
                    b" -> ",
                    cycle.to.name().as_bytes(),
                    b" flags 0x",
                    &flags,
                ],
            )
            .await;
        }
    }

    async fn log_line(usart: &mut Uart<'static, Async>, parts: &[&[u8]]) {
        // A lost log line must never stop the lights.
        for part in parts {
            if usart.write(part).await.is_err() {
                return;
            }
        }
        usart.write(b"\n").await.ok();
    }

    #[embassy_executor::main]
    async fn main(spawner: Spawner) {
        let peripherals = embassy_stm32::init(Default::default());

        if let Ok(usart) = Uart::new(
            peripherals.USART1,
            peripherals.PA10,
            peripherals.PA9,
            Irqs,
            peripherals.DMA1_CH4,
            peripherals.DMA1_CH5,
            Config::default(), // 115200 baud
        ) {
            spawner.must_spawn(log_task(usart, CYCLES.receiver()));
        }
        // Without a working serial port the lights run unlogged.

        let board = Board::new(
            [
                // main street: red, amber, green
                peripherals.PE1.degrade(),
                peripherals.PB9.degrade(),
                peripherals.PB7.degrade(),
                // side street: red, amber, green
                peripherals.PB6.degrade(),
                peripherals.PB8.degrade(),
                peripherals.PE0.degrade(),
                // walk across side street, walk across main street
                peripherals.PD12.degrade(),
                peripherals.PD13.degrade(),
            ],
            [
                // buttons: cross side street, cross main street
                peripherals.PE11.degrade(),
                peripherals.PE10.degrade(),
                // vehicle loops: side street, main street
                peripherals.PE8.degrade(),
                peripherals.PE9.degrade(),
            ],
        );

        let mut trafficlight = TrafficLight::new(board, EmbassyTick::new());
        let sender = CYCLES.sender();
        trafficlight
            .run(|cycle| {
                // Drop the line if the log task is behind.
                let _ = sender.try_send(*cycle);
            })
            .await
    }
}

// The firmware only exists for the board; on the host this binary is empty so
// that the library tests can build.
#[cfg(not(target_os = "none"))]
fn main() {}
